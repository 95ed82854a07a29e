pub const TOOLBAR_STYLE: &str = "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; background: var(--toolbar-bg); border-bottom: 1px solid var(--border-color); flex-shrink: 0;";

pub const TOOLBAR_BUTTON_STYLE: &str = "padding: 0.3rem 0.75rem; background: var(--control-bg); color: var(--text-primary); border: 1px solid var(--border-color); border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.8125rem;";

pub const PRIMARY_BUTTON_STYLE: &str = "padding: 0.3rem 0.75rem; background: var(--accent-bg); color: var(--accent-text); border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.8125rem;";

pub const MUTED_TEXT_STYLE: &str = "padding: 1rem; color: var(--text-muted); font-size: 0.875rem;";

pub const TERMINAL_STYLES: &str = r#"
/* Terminal */
.terminal {
    height: 100%;
    overflow-y: auto;
    padding: 0.75rem;
    background: #0b1220;
    color: #d1fae5;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.8125rem;
    line-height: 1.45;
    cursor: text;
}

.terminal-line {
    white-space: pre-wrap;
    word-break: break-word;
    min-height: 1.2em;
}

.terminal-prompt {
    display: flex;
    align-items: center;
    gap: 0.25rem;
}

.terminal-input {
    flex: 1;
    background: transparent;
    border: none;
    outline: none;
    color: inherit;
    font: inherit;
    caret-color: #34d399;
}
"#;
