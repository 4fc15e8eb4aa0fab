//! Built-in category rules.

use super::{RuleSpec, RuleTable};

type BuiltinRule = (
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

/// (category, domains, patterns, keywords) in declaration order.
const BUILTIN_RULES: &[BuiltinRule] = &[
    (
        "YouTube Videos",
        &["youtube.com", "youtu.be"],
        &[r"watch\?v=", r"youtube\.com/results"],
        &[],
    ),
    (
        "AI & Claude Tools",
        &["anthropic.com", "openai.com", "chatgpt.com"],
        &["claude", "chatgpt", "ai-", "llm", "gpt"],
        &[
            "Claude", "ChatGPT", "AI", "LLM", "Anthropic", "OpenAI", "Aider", "Serena", "agent",
        ],
    ),
    (
        "Task Management Tools",
        &[],
        &["task", "todo", "to-do"],
        &["Task", "Todo", "Taskwarrior", "TaskJuggler", "Taskchamp", "TODO"],
    ),
    (
        "GitHub Repositories",
        &["github.com"],
        &[r"github\.com/[^/]+/[^/]+"],
        &[],
    ),
    // `localhost:` here shadows the same pattern under "Local Development".
    (
        "Development Tools",
        &["stackoverflow.com", "developer.mozilla.org"],
        &["localhost:", r"127\.0\.0\.1:", "::1:", r"0\.0\.0\.0:"],
        &[
            "Excalidraw",
            "Superdesign",
            "DevTools",
            "CloudKit",
            "Swift",
            "developer",
            "framework",
            "SDK",
        ],
    ),
    (
        "Translation & Localization",
        &[],
        &["translat", "i18n", "l10n", "localiz"],
        &[
            "translate",
            "translation",
            "localization",
            "i18n",
            "l10n",
            "Lingo",
            "Okapi",
        ],
    ),
    (
        "Local Development",
        &[],
        &[
            "localhost:",
            r"127\.0\.0\.1:",
            r"http://[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+",
        ],
        &["Dashboard", "localhost"],
    ),
    // Path-bearing domains never match an authority; only the patterns and
    // keywords of this rule are effective for google/bing.
    (
        "Search Results",
        &["google.com/search", "bing.com/search", "duckduckgo.com"],
        &[r"search\?", "/search/", r"results\?search"],
        &["search results", "Repository search"],
    ),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl RuleTable {
    /// The built-in rule table.
    pub fn builtin() -> Self {
        let categories = BUILTIN_RULES
            .iter()
            .map(|(name, domains, patterns, keywords)| RuleSpec {
                name: name.to_string(),
                domains: owned(domains),
                patterns: owned(patterns),
                keywords: owned(keywords),
            })
            .collect();
        Self::new(categories)
    }
}
