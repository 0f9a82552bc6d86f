use clap::Parser;

use super::config::Config;

/// SocialLens - 性格倾向预测 Web 应用
#[derive(Parser, Debug)]
#[command(name = "sociallens", version, about)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// 模型文件路径（覆盖配置文件中的 modelPath）
    #[arg(short, long)]
    pub model: Option<String>,

    /// 监听地址（覆盖配置文件中的 host）
    #[arg(long)]
    pub host: Option<String>,

    /// 监听端口（覆盖配置文件中的 port）
    #[arg(long)]
    pub port: Option<u16>,
}

impl Args {
    /// 将命令行覆盖项写入配置
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.model_path = model.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
    }
}
