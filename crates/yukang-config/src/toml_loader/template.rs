//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Yukang Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[advice]
# endpoint = "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation"
# model = "qwen-turbo"
# result_format = "message"
# timeout_secs = 30          # 0 (no timeout) or 1-600
# connect_timeout_secs = 10  # 1-60
# The API key is read from this environment variable (or a .env file);
# it is never stored in this file.
# api_key_env = "DASHSCOPE_API_KEY"
# persona = "你是一个鱼类疾病专家，专门回答关于鱼类健康、疾病治疗和预防的问题。请提供专业、准确的建议。"
# fallback = "diagnostic"    # diagnostic, canned

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
