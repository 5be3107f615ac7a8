//! Commented template written on first run.

pub(super) fn default_config_toml() -> &'static str {
    r##"# Webpane Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[toolbar]
# course = true            # back / forward buttons
# refresh = true           # refresh / stop button
# action = true            # share button
# device_class = "auto"    # auto, compact, regular
# split_view = false

[navigation]
# home_url = "https://example.com"
# external_schemes = ["tel", "telprompt", "sms", "mailto"]
# external_hosts = ["itunes.apple.com"]
# user_agent = "Webpane/0.1"

[window]
# title = "Webpane"
# width = 1024             # 200-7680
# height = 768             # 200-4320
# devtools = false

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##
}
