//! multipart/form-data 表单
//!
//! 只描述字段，不负责编码：浏览器端把各个字段填进 `FormData`，
//! 其他客户端交给各自 HTTP 库的 multipart 实现，边界都由编码方生成。

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            value: PartValue::Text(value.into()),
        });
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            value: PartValue::File {
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                bytes,
            },
        });
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    /// 取出文本字段的值
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(v) if p.name == name => Some(v.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_keep_insertion_order() {
        let form = MultipartForm::new()
            .text("title", "Alien")
            .file("image", "poster.png", "image/png", vec![0x89, b'P', b'N', b'G'])
            .text("rating", "5");

        assert_eq!(form.field_names(), vec!["title", "image", "rating"]);
        assert_eq!(form.text_value("rating"), Some("5"));
        assert_eq!(form.text_value("image"), None);
        assert!(matches!(
            &form.parts()[1].value,
            PartValue::File { file_name, content_type, bytes }
                if file_name == "poster.png" && content_type == "image/png" && bytes.len() == 4
        ));
    }
}
