//! Bulk roster input.
//!
//! Parses pasted text into students: one name per line. Tab-separated lines
//! (a paste from a spreadsheet) keep only the first column. Blank lines are
//! skipped and surrounding whitespace is trimmed.

use crate::ident::IdGenerator;
use crate::models::Student;

/// Parses pasted roster text into students with freshly generated ids.
///
/// Parsed students start with empty attribute lists; tagging happens in the
/// evaluation step.
pub fn parse_roster(input: &str, ids: &mut dyn IdGenerator) -> Vec<Student> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let name = line.split('\t').next().unwrap_or_default().trim();
            Student::new(ids.next_id()).with_name(name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::SequentialIds;

    #[test]
    fn test_one_name_per_line() {
        let mut ids = SequentialIds::new("s");
        let students = parse_roster("김철수\n이영희\n박민준", &mut ids);

        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["김철수", "이영희", "박민준"]);
        assert_eq!(students[0].id, "s1");
        assert_eq!(students[2].id, "s3");
    }

    #[test]
    fn test_tab_separated_keeps_first_column() {
        let mut ids = SequentialIds::new("s");
        let students = parse_roster("김철수\t3학년\t12번\n이영희\t3학년", &mut ids);

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "김철수");
        assert_eq!(students[1].name, "이영희");
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let mut ids = SequentialIds::new("s");
        let students = parse_roster("  김철수  \n\n   \n이영희\n", &mut ids);

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "김철수");
    }

    #[test]
    fn test_empty_input() {
        let mut ids = SequentialIds::new("s");
        assert!(parse_roster("", &mut ids).is_empty());
    }

    #[test]
    fn test_parsed_students_start_untagged() {
        let mut ids = SequentialIds::new("s");
        let students = parse_roster("김철수", &mut ids);
        assert_eq!(students[0].difficulty_count(), 0);
        assert_eq!(students[0].helper_count(), 0);
    }
}
