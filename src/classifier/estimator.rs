//! 估计器
//!
//! 支持三种序列化后的模型结构：二分类逻辑回归、数组编码的决策树、
//! 以及软投票随机森林。所有估计器输出类别下标，由调用方映射为标签。

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

/// 叶子节点标记
const TREE_LEAF: i64 = -1;

/// 序列化的估计器
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Estimator {
    /// 二分类逻辑回归：w·x + b > 0 时输出类别 1
    #[serde(rename_all = "camelCase")]
    LogisticRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    DecisionTree(DecisionTree),
    /// 各棵树叶子分布归一化后取平均，再取最大值
    #[serde(rename_all = "camelCase")]
    RandomForest { trees: Vec<DecisionTree> },
}

/// 数组编码的二叉决策树
///
/// 节点 `n` 为叶子当且仅当 `children_left[n] == -1`；
/// 内部节点在 `x[feature[n]] <= threshold[n]` 时走左子树。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// 每个节点上各类别的样本数（或权重）
    pub value: Vec<Vec<f64>>,
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::LogisticRegression { .. } => "logisticRegression",
            Estimator::DecisionTree(_) => "decisionTree",
            Estimator::RandomForest { .. } => "randomForest",
        }
    }

    /// 结构校验
    pub fn validate(&self, n_features: usize, n_classes: usize) -> Result<()> {
        match self {
            Estimator::LogisticRegression { coefficients, .. } => {
                ensure!(
                    n_classes == 2,
                    "逻辑回归仅支持二分类，实际类别数: {}",
                    n_classes
                );
                ensure!(
                    coefficients.len() == n_features,
                    "系数个数 {} 与特征数 {} 不一致",
                    coefficients.len(),
                    n_features
                );
                Ok(())
            }
            Estimator::DecisionTree(tree) => tree.validate(n_features, n_classes),
            Estimator::RandomForest { trees } => {
                ensure!(!trees.is_empty(), "随机森林至少需要一棵树");
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate(n_features, n_classes)
                        .map_err(|e| e.context(format!("第 {} 棵树无效", i)))?;
                }
                Ok(())
            }
        }
    }

    /// 对一行（已按训练列顺序排列的）特征预测类别下标
    pub fn predict_index(&self, x: &[f64]) -> usize {
        match self {
            Estimator::LogisticRegression {
                coefficients,
                intercept,
            } => {
                let decision: f64 = coefficients
                    .iter()
                    .zip(x)
                    .map(|(w, v)| w * v)
                    .sum::<f64>()
                    + intercept;
                usize::from(decision > 0.0)
            }
            Estimator::DecisionTree(tree) => argmax(tree.leaf_value(x)),
            Estimator::RandomForest { trees } => {
                let n_classes = trees[0].value[0].len();
                let mut proba = vec![0.0; n_classes];
                for tree in trees {
                    let leaf = tree.leaf_value(x);
                    let total: f64 = leaf.iter().sum();
                    if total > 0.0 {
                        for (p, v) in proba.iter_mut().zip(leaf) {
                            *p += v / total;
                        }
                    }
                }
                argmax(&proba)
            }
        }
    }
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> Result<()> {
        let n = self.node_count();
        ensure!(n > 0, "决策树没有任何节点");
        ensure!(
            self.children_right.len() == n
                && self.feature.len() == n
                && self.threshold.len() == n
                && self.value.len() == n,
            "决策树数组长度不一致"
        );

        for node in 0..n {
            ensure!(
                self.value[node].len() == n_classes,
                "节点 {} 的类别分布长度 {} 与类别数 {} 不一致",
                node,
                self.value[node].len(),
                n_classes
            );

            let left = self.children_left[node];
            let right = self.children_right[node];
            if left == TREE_LEAF {
                ensure!(right == TREE_LEAF, "节点 {} 只有一个子节点", node);
                continue;
            }

            // 子节点下标必须大于父节点，保证遍历必然终止
            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    bail!("节点 {} 的子节点下标 {} 越界", node, child);
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature >= n_features as i64 {
                bail!("节点 {} 的特征下标 {} 越界", node, feature);
            }
        }
        Ok(())
    }

    /// 从根节点走到叶子，返回叶子的类别分布
    fn leaf_value(&self, x: &[f64]) -> &[f64] {
        let mut node = 0usize;
        while self.children_left[node] != TREE_LEAF {
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        &self.value[node]
    }
}

/// 取最大值下标，并列时取第一个
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
