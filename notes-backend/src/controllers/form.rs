//! `application/x-www-form-urlencoded` decoding that keeps values as raw bytes.
//!
//! Page bodies are stored byte-for-byte, so percent-escapes that are not
//! valid UTF-8 must survive decoding instead of becoming U+FFFD.

/// Decoded form fields in submission order
#[derive(Debug)]
pub struct FormFields(Vec<(Vec<u8>, Vec<u8>)>);

impl FormFields {
    pub fn parse(payload: &[u8]) -> Self {
        let fields = payload
            .split(|&b| b == b'&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (name, value) = match pair.iter().position(|&b| b == b'=') {
                    Some(i) => (&pair[..i], &pair[i + 1..]),
                    None => (pair, &[][..]),
                };
                (decode_component(name), decode_component(value))
            })
            .collect();
        Self(fields)
    }

    /// First value submitted for `name`; empty when the field is absent
    pub fn get(&self, name: &str) -> &[u8] {
        self.0
            .iter()
            .find(|(key, _)| key.as_slice() == name.as_bytes())
            .map(|(_, value)| value.as_slice())
            .unwrap_or_default()
    }
}

fn decode_component(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    urlencoding::decode_binary(&spaced).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_utf8_escapes_are_kept() {
        let form = FormFields::parse(b"body=ok%FF%00");
        assert_eq!(form.get("body"), &[b'o', b'k', 0xff, 0x00]);
    }

    #[test]
    fn test_plus_and_utf8_escapes() {
        let form = FormFields::parse(b"title=Hello&body=a+b%2Bc%20%C3%A9");
        assert_eq!(form.get("title"), b"Hello");
        assert_eq!(form.get("body"), "a b+c \u{e9}".as_bytes());
    }

    #[test]
    fn test_missing_and_repeated_fields() {
        let form = FormFields::parse(b"body=first&body=second&flag&&empty=");
        assert_eq!(form.get("body"), b"first");
        assert!(form.get("flag").is_empty());
        assert!(form.get("empty").is_empty());
        assert!(form.get("title").is_empty());
    }

    #[test]
    fn test_empty_payload() {
        assert!(FormFields::parse(b"").get("body").is_empty());
    }
}
