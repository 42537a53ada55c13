//! HTTP 客户端辅助函数
//!
//! 所有请求都带全局截止时间，超时后请求以 `Timeout` 失败而不是挂起。

use std::time::Duration;
use ureq::Agent;

/// 创建一个带全局超时的 HTTP agent
pub fn agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}
