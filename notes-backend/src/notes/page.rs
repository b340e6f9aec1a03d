use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A titled note. The body is kept as raw bytes, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Title-only projection used for listings and for blank edit forms
    pub fn stub(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }
}

// Templates see the body as text; invalid UTF-8 is replaced, never stored back.
impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Page", 2)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("body", &String::from_utf8_lossy(&self.body))?;
        state.end()
    }
}

/// Request-scoped data for the list template
#[derive(Debug, serde::Serialize)]
pub struct ListPageInfo {
    pub page_title: String,
    pub pages: Vec<Page>,
}

impl ListPageInfo {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            page_title: "List Pages".to_string(),
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_serializes_body_as_text() {
        let page = Page::new("Hello", "line one\nline two");
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["title"], "Hello");
        assert_eq!(value["body"], "line one\nline two");
    }

    #[test]
    fn test_invalid_utf8_body_is_replaced() {
        let page = Page::new("Bin", vec![b'o', b'k', 0xff]);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["body"], "ok\u{fffd}");
    }

    #[test]
    fn test_list_info_shape() {
        let info = ListPageInfo::new(vec![Page::stub("a"), Page::stub("b")]);
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["page_title"], "List Pages");
        assert_eq!(value["pages"][1]["title"], "b");
        assert_eq!(value["pages"][0]["body"], "");
    }
}
