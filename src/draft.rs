//! 新建/编辑表单中尚未保存的影片数据

use crate::multipart::MultipartForm;
use moviehub_shared::MovieRecord;

/// 待上传的海报
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    pub review: String,
    pub rating: Option<u8>,
    pub image: Option<ImageUpload>,
}

impl MovieDraft {
    /// 用已有记录预填编辑表单（影评缺省为空，评分缺省为 1）
    pub fn from_record(movie: &MovieRecord) -> Self {
        Self {
            title: movie.title.clone(),
            description: movie.description.clone(),
            review: movie.review.clone().unwrap_or_default(),
            rating: Some(movie.rating.map(|r| r.value()).unwrap_or(1)),
            image: None,
        }
    }

    /// 编码为上传表单
    ///
    /// 四个文本字段总是存在（评分未填时为空串），海报仅在选择了文件时附带。
    pub fn to_multipart(&self) -> MultipartForm {
        let rating = self.rating.map(|r| r.to_string()).unwrap_or_default();
        let form = MultipartForm::new()
            .text("title", self.title.as_str())
            .text("description", self.description.as_str())
            .text("review", self.review.as_str())
            .text("rating", rating);

        match &self.image {
            Some(img) => form.file("image", &img.file_name, &img.content_type, img.bytes.clone()),
            None => form,
        }
    }
}
