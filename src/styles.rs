//! Global stylesheet and the light theme.
//!
//! The theme is exposed as CSS custom properties on `:root` so every
//! component can refer to `var(--gray-three)` and friends.

/// Light palette: primary colour and a gray scale from darkest (`one`) to
/// lightest (`five`).
pub struct Theme {
    pub primary: &'static str,
    pub gray_one: &'static str,
    pub gray_two: &'static str,
    pub gray_three: &'static str,
    pub gray_four: &'static str,
    pub gray_five: &'static str,
    pub font_roboto: &'static str,
}

pub const LIGHT: Theme = Theme {
    primary: "#5c6bc0",
    gray_one: "#212121",
    gray_two: "#424242",
    gray_three: "#9e9e9e",
    gray_four: "#757575",
    gray_five: "#f2f2f2",
    font_roboto: "'Roboto', sans-serif",
};

impl Theme {
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n    --primary: {};\n    --gray-one: {};\n    --gray-two: {};\n    \
             --gray-three: {};\n    --gray-four: {};\n    --gray-five: {};\n    --font-roboto: {};\n}}\n",
            self.primary,
            self.gray_one,
            self.gray_two,
            self.gray_three,
            self.gray_four,
            self.gray_five,
            self.font_roboto,
        )
    }
}

pub const GLOBAL_CSS: &str = r#"
html,
body {
    margin: 0;
    padding: 0;
}
html,
body,
body > div:first-child {
    height: 100%;
}
body {
    background-color: white;
}
* {
    box-sizing: border-box;
}

.header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px 5%;
    border-bottom: 1px solid var(--gray-five);
    font-family: var(--font-roboto);
}
.header .logo {
    font-weight: 700;
    font-size: 22px;
    color: var(--primary);
    text-decoration: none;
}
.header nav a {
    margin-left: 24px;
    color: var(--gray-two);
    text-decoration: none;
}
.home-headline {
    margin: 8px 0 0 0;
    font-size: 18px;
    font-weight: 400;
    color: var(--gray-four);
}

.content {
    font-family: var(--font-roboto);
    padding: 0 5% 70px 5%;
    margin: 70px auto;
    max-width: 974px;
    box-sizing: content-box;
}
.tip {
    font-size: 16px;
    color: var(--gray-four);
    display: inline-flex;
    align-items: center;
}
.tip img {
    margin-right: 4px;
}
.search-bar {
    background: url(icons/search.svg) no-repeat 98% 50% padding-box;
    font-weight: 400;
    font-size: 24px;
    width: 100%;
    background-color: var(--gray-five);
    border: none;
    border-radius: 4px;
    padding: 14px;
    margin-bottom: 60px;
}
.search-bar::placeholder {
    color: var(--gray-three);
}

.project {
    padding: 24px 0;
}
.project.separated {
    border-bottom: 1px solid var(--gray-five);
}
.project-name {
    font-size: 24px;
    font-weight: 500;
    color: var(--gray-one);
    text-decoration: none;
}
.project-description {
    color: var(--gray-two);
    line-height: 1.5;
}
.tag,
.skill {
    display: inline-block;
    margin: 0 8px 8px 0;
    padding: 4px 10px;
    border-radius: 12px;
    font-size: 13px;
}
.tag {
    background-color: var(--gray-five);
    color: var(--gray-two);
}
.skill {
    border: 1px solid var(--primary);
    color: var(--primary);
}

.project-loader {
    padding: 24px 0;
}
.project-loader .bar {
    height: 14px;
    margin-bottom: 12px;
    border-radius: 4px;
    background: linear-gradient(90deg, var(--gray-five) 25%, #e6e6e6 50%, var(--gray-five) 75%);
    background-size: 200% 100%;
    animation: shimmer 1.2s infinite;
}
.project-loader .bar.title {
    width: 40%;
    height: 22px;
}
.project-loader .bar.short {
    width: 60%;
}
@keyframes shimmer {
    from { background-position: 200% 0; }
    to { background-position: -200% 0; }
}
.feed-error,
.feed-empty {
    color: var(--gray-four);
    text-align: center;
}

.signup-sheet {
    max-width: 420px;
    margin: 60px auto;
    padding: 40px;
    border-radius: 8px;
    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
    font-family: var(--font-roboto);
}
.title {
    text-align: center;
    color: var(--gray-one);
}
.input-wrap {
    display: flex;
    flex-direction: column;
}
.input-label {
    margin: 12px 0 6px 0;
    color: var(--gray-two);
}
.input {
    padding: 12px;
    border: none;
    border-radius: 4px;
    background-color: var(--gray-five);
    font-size: 16px;
}
.button {
    margin-top: 28px;
    padding: 12px;
    border: none;
    border-radius: 4px;
    background-color: var(--primary);
    color: white;
    font-size: 16px;
    cursor: pointer;
}
.button-hint {
    text-align: center;
    font-size: 14px;
    color: var(--gray-four);
    margin-top: 8px;
}
.signup-with {
    margin: 25px 0;
}
.integrations {
    display: flex;
    justify-content: center;
    gap: 40px;
}
.integration-button {
    display: inline-flex;
    padding: 10px;
    border-radius: 50%;
    background-color: var(--gray-five);
}
"#;

/// Theme variables followed by the global rules.
pub fn stylesheet() -> String {
    format!("{}{}", LIGHT.css_variables(), GLOBAL_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_starts_with_theme_variables() {
        let css = stylesheet();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--gray-five: #f2f2f2;"));
        assert!(css.contains("box-sizing: border-box;"));
    }
}
