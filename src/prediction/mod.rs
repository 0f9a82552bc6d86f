//! 性格预测模块
//!
//! 组装特征记录、调用预训练模型、解读预测标签

pub mod error;
pub mod features;
pub mod personality;
pub mod service;

pub use error::PredictError;
pub use features::{FeatureRecord, YesNo};
pub use personality::Personality;
pub use service::{Prediction, predict_one};
