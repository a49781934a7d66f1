/// Make a calendar display name safe for use as a file name by replacing
/// path separators, shell-hostile characters, and spaces with `_`.
pub fn sanitized_file_name(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            ':' | '/' | '\\' | '?' | '%' | '*' | '|' | '"' | '<' | '>' | ' ' => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_spaces_and_separators() {
        assert_eq!(sanitized_file_name("All VCT Matches"), "All_VCT_Matches");
        assert_eq!(sanitized_file_name("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitized_file_name("who? 100%"), "who__100_");
    }

    #[test]
    fn keeps_unicode_team_names() {
        assert_eq!(sanitized_file_name("KRÜ Esports"), "KRÜ_Esports");
        assert_eq!(sanitized_file_name("LEVIATÁN"), "LEVIATÁN");
    }
}
