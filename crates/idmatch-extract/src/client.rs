use crate::errors::ServiceError;
use crate::ocr::TextBlock;

/// OCR service handle.
pub trait TextDetector: Send + Sync {
    /// Detects text in a document image.
    fn detect_text(&self, image: &[u8]) -> Result<Vec<TextBlock>, ServiceError>;
}

/// Structured-extraction model handle.
pub trait ModelInvoker: Send + Sync {
    /// Invokes `model_id` with a JSON request body and returns the raw response body.
    fn invoke(&self, model_id: &str, body: &[u8]) -> Result<Vec<u8>, ServiceError>;
}

impl<T: TextDetector + ?Sized> TextDetector for &T {
    fn detect_text(&self, image: &[u8]) -> Result<Vec<TextBlock>, ServiceError> {
        (**self).detect_text(image)
    }
}

impl<T: ModelInvoker + ?Sized> ModelInvoker for &T {
    fn invoke(&self, model_id: &str, body: &[u8]) -> Result<Vec<u8>, ServiceError> {
        (**self).invoke(model_id, body)
    }
}
