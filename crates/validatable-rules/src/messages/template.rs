/// Replaces every `:placeholder` in `template` with its value.
///
/// Longer placeholders are substituted first, so `:min` never clobbers a `:minimum`.
pub fn render(template: &str, replacements: &[(&str, String)]) -> String {
    let mut ordered: Vec<&(&str, String)> = replacements.iter().collect();
    ordered.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));

    ordered
        .into_iter()
        .fold(template.to_string(), |message, (placeholder, value)| {
            message.replace(&format!(":{placeholder}"), value)
        })
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_render_placeholders() {
        let message = render(
            "The :attribute field must be between :min and :max characters.",
            &[
                ("attribute", "name".to_string()),
                ("min", "2".to_string()),
                ("max", "75".to_string()),
            ],
        );
        assert_eq!(
            message,
            "The name field must be between 2 and 75 characters."
        );
    }

    #[test]
    fn test_should_render_longest_placeholder_first() {
        let message = render(
            ":min / :minimum",
            &[("min", "1".to_string()), ("minimum", "10".to_string())],
        );
        assert_eq!(message, "1 / 10");
    }

    #[test]
    fn test_should_leave_unknown_placeholders() {
        assert_eq!(render("Hello :who", &[]), "Hello :who");
    }
}
