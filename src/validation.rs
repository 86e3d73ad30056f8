use lettre::message::Mailbox;

/// True when `input` parses as a single mailbox whose canonical address is
/// exactly `input`. Display names, angle brackets and surrounding whitespace
/// all fail the comparison. Quoted local parts and IP-literal domains are
/// rejected as well. No deliverability check is made.
pub fn is_valid_email(input: &str) -> bool {
    match input.parse::<Mailbox>() {
        Ok(mb) => mb.name.is_none() && mb.email.to_string() == input,
        Err(_) => false,
    }
}
