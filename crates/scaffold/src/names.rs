// crates/scaffold/src/names.rs

/// Id used when the user gives a blank project name.
pub const DEFAULT_PROJECT_ID: &str = "new-game";

/// Every spelling of a project name the generated files need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNames {
    /// Folder name, as typed (`my-cool-game`).
    pub id: String,
    /// `myCoolGame`
    pub lowercase_title: String,
    /// `MyCoolGame`, used as the window title.
    pub title: String,
    /// `My Cool Game`
    pub vanity_name: String,
}

impl ProjectNames {
    pub fn derive(raw_id: &str) -> Self {
        let trimmed = raw_id.trim();
        let id = if trimmed.is_empty() {
            DEFAULT_PROJECT_ID
        } else {
            trimmed
        };

        let lowercase_title = camel_case(id);
        let title = capitalize_first(&lowercase_title);
        let vanity_name = split_before_capitals(&title);

        Self {
            id: id.to_string(),
            lowercase_title,
            title,
            vanity_name,
        }
    }
}

/// `-x` becomes `X` for lowercase ASCII `x`; other dashes are kept.
fn camel_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut chars = id.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_before_capitals(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_spellings() {
        let names = ProjectNames::derive("  my-cool-game ");
        assert_eq!(names.id, "my-cool-game");
        assert_eq!(names.lowercase_title, "myCoolGame");
        assert_eq!(names.title, "MyCoolGame");
        assert_eq!(names.vanity_name, "My Cool Game");
    }

    #[test]
    fn blank_id_falls_back_to_default() {
        let names = ProjectNames::derive("   ");
        assert_eq!(names.id, DEFAULT_PROJECT_ID);
        assert_eq!(names.title, "NewGame");
        assert_eq!(names.vanity_name, "New Game");
    }

    #[test]
    fn only_dash_lowercase_pairs_are_joined() {
        let names = ProjectNames::derive("space-2d-shooter");
        assert_eq!(names.lowercase_title, "space-2dShooter");
        assert_eq!(names.vanity_name, "Space-2d Shooter");

        assert_eq!(ProjectNames::derive("asteroids").vanity_name, "Asteroids");
        assert_eq!(ProjectNames::derive("trailing-").lowercase_title, "trailing-");
    }
}
