use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of menu categories, declared in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCourse(pub String);

impl fmt::Display for UnknownCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown course '{}'", self.0)
    }
}

impl std::error::Error for UnknownCourse {}

impl FromStr for Course {
    type Err = UnknownCourse;

    /// Exact course name, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.as_str() == trimmed)
            .ok_or_else(|| UnknownCourse(s.to_string()))
    }
}

/// Course selector used by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFilter {
    All,
    Only(Course),
    /// Anything that is neither "All" nor a course name. Matches nothing.
    Unknown(String),
}

impl CourseFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Empty input counts as an omitted filter.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == Self::ALL_LABEL {
            return CourseFilter::All;
        }
        match trimmed.parse::<Course>() {
            Ok(course) => CourseFilter::Only(course),
            Err(_) => CourseFilter::Unknown(trimmed.to_string()),
        }
    }

    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(wanted) => *wanted == course,
            CourseFilter::Unknown(_) => false,
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        CourseFilter::Only(course)
    }
}

impl From<Option<Course>> for CourseFilter {
    fn from(course: Option<Course>) -> Self {
        course.map_or(CourseFilter::All, CourseFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_names() {
        assert_eq!("Starters".parse::<Course>(), Ok(Course::Starters));
        assert_eq!("  Mains ".parse::<Course>(), Ok(Course::Mains));
        assert_eq!("Dessert".parse::<Course>(), Ok(Course::Dessert));
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert!("Soup".parse::<Course>().is_err());
        assert!("".parse::<Course>().is_err());
        assert!("mains".parse::<Course>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for course in Course::ALL {
            assert_eq!(course.to_string().parse::<Course>(), Ok(course));
        }
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CourseFilter::parse("All"), CourseFilter::All);
        assert_eq!(CourseFilter::parse(""), CourseFilter::All);
        assert_eq!(
            CourseFilter::parse("Dessert"),
            CourseFilter::Only(Course::Dessert)
        );
        assert_eq!(
            CourseFilter::parse("Breakfast"),
            CourseFilter::Unknown("Breakfast".to_string())
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CourseFilter::All.matches(Course::Mains));
        assert!(CourseFilter::Only(Course::Mains).matches(Course::Mains));
        assert!(!CourseFilter::Only(Course::Mains).matches(Course::Dessert));
        assert!(!CourseFilter::Unknown("x".to_string()).matches(Course::Starters));
    }

    #[test]
    fn test_filter_from_option() {
        assert_eq!(CourseFilter::from(None), CourseFilter::All);
        assert_eq!(
            CourseFilter::from(Some(Course::Starters)),
            CourseFilter::Only(Course::Starters)
        );
    }
}
