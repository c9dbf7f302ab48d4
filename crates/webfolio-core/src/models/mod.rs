mod upload;

pub use upload::{
    ConversionRecord, ConversionSummary, ServiceInfo, UploadResponse, UploadedItem,
};
