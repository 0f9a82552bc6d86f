//! 模型文件加载
//!
//! 模型以 JSON 文件序列化，包含训练列名、类别标签和估计器参数。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::prediction::FeatureRecord;
use crate::prediction::features::FEATURE_NAMES;

use super::estimator::Estimator;
use super::{Classifier, ModelInfo};

/// 序列化的模型文件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// 训练时的列名及顺序
    pub feature_names: Vec<String>,
    /// 类别标签，按估计器输出下标索引
    pub classes: Vec<String>,
    pub estimator: Estimator,
}

impl ModelArtifact {
    /// 从 JSON 字节解析并校验
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_slice(bytes).context("模型文件格式无效")?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// 校验列名、类别与估计器结构
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.feature_names.len() == FEATURE_NAMES.len(),
            "模型需要 {} 个特征，实际声明了 {} 个",
            FEATURE_NAMES.len(),
            self.feature_names.len()
        );
        for (i, name) in self.feature_names.iter().enumerate() {
            if !FEATURE_NAMES.contains(&name.as_str()) {
                bail!("未知的特征列: {}", name);
            }
            if self.feature_names[..i].contains(name) {
                bail!("重复的特征列: {}", name);
            }
        }
        ensure!(self.classes.len() >= 2, "模型至少需要两个类别");

        self.estimator
            .validate(self.feature_names.len(), self.classes.len())
            .context("估计器结构无效")
    }
}

/// 基于模型文件的分类器
#[derive(Debug)]
pub struct ArtifactClassifier {
    artifact: ModelArtifact,
    info: ModelInfo,
}

impl ArtifactClassifier {
    /// 从磁盘加载模型文件
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("读取模型文件失败: {}", path.display()))?;
        let artifact = ModelArtifact::from_slice(&bytes)
            .with_context(|| format!("加载模型文件失败: {}", path.display()))?;

        let sha256 = hex::encode(Sha256::digest(&bytes));
        Ok(Self::new(artifact, sha256, path.display().to_string()))
    }

    fn new(artifact: ModelArtifact, sha256: String, path: String) -> Self {
        let info = ModelInfo {
            name: artifact.name.clone(),
            version: artifact.version.clone(),
            kind: artifact.estimator.kind(),
            feature_names: artifact.feature_names.clone(),
            classes: artifact.classes.clone(),
            sha256,
            path,
        };
        Self { artifact, info }
    }

    /// 按训练列顺序排列一行特征
    fn align(&self, record: &FeatureRecord) -> Result<Vec<f64>> {
        self.artifact
            .feature_names
            .iter()
            .map(|name| {
                record
                    .value_of(name)
                    .with_context(|| format!("特征记录缺少列: {}", name))
            })
            .collect()
    }
}

impl Classifier for ArtifactClassifier {
    fn predict(&self, batch: &[FeatureRecord]) -> Result<Vec<String>> {
        batch
            .iter()
            .map(|record| {
                let x = self.align(record)?;
                let index = self.artifact.estimator.predict_index(&x);
                self.artifact
                    .classes
                    .get(index)
                    .cloned()
                    .with_context(|| format!("模型输出了不存在的类别下标: {}", index))
            })
            .collect()
    }

    fn info(&self) -> &ModelInfo {
        &self.info
    }
}
