//! Plain-text rendering of the transcript and help screens.

use std::io::{self, Write};

use yukang_ai::{Message, Role, TokenTracker, PRESETS};

pub fn greeting(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🧠 渔康智鉴AI助手")?;
    writeln!(out, "🐟 一位资深的水产养殖专家，能助您解决各类养殖问题 🐟")?;
    writeln!(out)?;
    presets(out)?;
    writeln!(out)?;
    writeln!(
        out,
        "🧡 你好，我是渔康智鉴问答助手。有任何关于鱼类健康与养殖的问题都可以问我！"
    )?;
    writeln!(out, "（输入 /help 查看命令）")
}

pub fn presets(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "试试这些常见问题：")?;
    for (i, preset) in PRESETS.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, preset.question)?;
    }
    Ok(())
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  1-4        提问对应的常见问题")?;
    writeln!(out, "  /presets   列出常见问题")?;
    writeln!(out, "  /history   显示对话记录")?;
    writeln!(out, "  /reset     重置会话")?;
    writeln!(out, "  /usage     显示用量统计")?;
    writeln!(out, "  /quit      退出")?;
    writeln!(out, "  其他输入将作为问题发送")
}

fn label(role: Role) -> &'static str {
    match role {
        Role::User => "[用户]",
        Role::Assistant => "[助手]",
        Role::System => "[系统]",
    }
}

pub fn message(out: &mut impl Write, message: &Message) -> io::Result<()> {
    writeln!(out, "{} {}", label(message.role), message.content)
}

pub fn transcript(out: &mut impl Write, messages: &[Message]) -> io::Result<()> {
    writeln!(out, "### 对话记录")?;
    if messages.is_empty() {
        return writeln!(out, "（暂无对话）");
    }
    for m in messages {
        message(out, m)?;
    }
    Ok(())
}

pub fn usage(out: &mut impl Write, tracker: &TokenTracker) -> io::Result<()> {
    writeln!(
        out,
        "提问 {} 次（在线回答 {}，本地回退 {}），输入 {} tokens，输出 {} tokens",
        tracker.call_count(),
        tracker.live_answers(),
        tracker.fallback_answers(),
        tracker.total().input_tokens,
        tracker.total().output_tokens,
    )
}
