/// Deep link that opens a chat with `phone` and a pre-filled `message`.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONTACT_MESSAGE, CONTACT_PHONE};

    #[test]
    fn builds_encoded_link() {
        let url = whatsapp_url(CONTACT_PHONE, CONTACT_MESSAGE);
        assert!(url.starts_with("https://wa.me/+919667964138?text=Hi%21%20I"));
        assert!(!url.contains(' '));
    }
}
