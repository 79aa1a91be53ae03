//! Advice service defaults shared by the config schema and the client.

/// DashScope text-generation endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation";

/// Environment variable holding the bearer credential.
pub const DEFAULT_API_KEY_ENV: &str = "DASHSCOPE_API_KEY";

pub const DEFAULT_MODEL: &str = "qwen-turbo";

/// `message` answers under `output.choices`; `text` under `output.text`.
pub const DEFAULT_RESULT_FORMAT: &str = "message";

pub const DEFAULT_TIMEOUT_SECS: u32 = 30;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u32 = 10;
