use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorktimeError {
    #[error("Fayl topilmadi: {0}")]
    FileNotFound(String),

    #[error("Excel faylni o'qib bo'lmadi: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Faylda birorta varaq (sheet) topilmadi")]
    NoSheet,

    #[error("Faylda '{0}' sarlavhasi topilmadi")]
    HeaderNotFound(String),

    #[error("Kerakli ustunlar topilmadi. Fayl ustunlari: {}", .available.join(", "))]
    ColumnsNotFound { available: Vec<String> },

    #[error("Excel hisobot yozishda xato: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON xato: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO xato: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorktimeError>;
