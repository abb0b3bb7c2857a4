mod csv;
pub mod logic;
mod model;
mod pdf;

pub use logic::ExportLogic;
pub use model::HistoryExport;
pub use pdf::PdfManager;
