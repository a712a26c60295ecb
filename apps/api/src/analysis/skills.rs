//! Skill Matcher: splits a role's skills into those mentioned in the resume and those not.

use crate::analysis::round2;

/// Outcome of matching one resume against one skill list.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// Original-case skills found in the resume, in skill-list order.
    pub present: Vec<String>,
    /// Original-case skills not found, in skill-list order.
    pub missing: Vec<String>,
    /// 0 – 100, two decimals.
    pub percentage: f64,
}

/// Case-insensitive substring match of every skill against the resume text.
///
/// A skill counts as present when its lowercase form occurs anywhere in the
/// lowercased resume, including inside longer words ("R" matches "Architecture").
/// Short skills therefore over-match; callers rely on this behaviour.
pub fn match_skills(resume_text: &str, skills: &[String]) -> SkillMatch {
    let resume_lower = resume_text.to_lowercase();

    let (present, missing): (Vec<String>, Vec<String>) = skills
        .iter()
        .cloned()
        .partition(|skill| resume_lower.contains(&skill.to_lowercase()));

    SkillMatch {
        percentage: match_percentage(present.len(), skills.len()),
        present,
        missing,
    }
}

/// `present / total × 100`, rounded. An empty skill list scores 0.
fn match_percentage(present: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(present as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn backend_skills() -> Vec<String> {
        skills(&[
            "Java",
            "Spring Boot",
            "REST",
            "MySQL",
            "Docker",
            "Git",
            "Microservices",
            "Python",
            "AWS",
            "Kubernetes",
        ])
    }

    #[test]
    fn test_backend_scenario() {
        let result = match_skills(
            "Experienced in Python and Docker, built microservices.",
            &backend_skills(),
        );
        assert_eq!(result.present, vec!["Docker", "Microservices", "Python"]);
        assert_eq!(
            result.missing,
            vec!["Java", "Spring Boot", "REST", "MySQL", "Git", "AWS", "Kubernetes"]
        );
        assert_eq!(result.percentage, 30.0);
    }

    #[test]
    fn test_partition_covers_every_skill_once() {
        let all = backend_skills();
        let result = match_skills("java git aws and some spring boot", &all);

        let present: HashSet<_> = result.present.iter().collect();
        let missing: HashSet<_> = result.missing.iter().collect();
        assert!(present.is_disjoint(&missing));
        assert_eq!(result.present.len() + result.missing.len(), all.len());
        let union: HashSet<_> = present.union(&missing).copied().collect();
        assert_eq!(union, all.iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_case_insensitive() {
        let list = skills(&["Docker"]);
        for resume in ["docker", "DOCKER", "Docker", "dOcKeR compose"] {
            let result = match_skills(resume, &list);
            assert_eq!(result.present, vec!["Docker"], "resume: {resume}");
        }
    }

    #[test]
    fn test_original_case_is_reported() {
        let result = match_skills("i write typescript daily", &skills(&["TypeScript"]));
        assert_eq!(result.present, vec!["TypeScript"]);
    }

    #[test]
    fn test_short_skill_matches_inside_words() {
        let result = match_skills("Software Architecture", &skills(&["R", "SQL"]));
        assert_eq!(result.present, vec!["R"]);
        assert_eq!(result.missing, vec!["SQL"]);
    }

    #[test]
    fn test_multi_word_skill_needs_contiguous_text() {
        let list = skills(&["Machine Learning"]);
        assert_eq!(match_skills("machine learning", &list).present.len(), 1);
        assert_eq!(match_skills("learning machine", &list).present.len(), 0);
        assert_eq!(match_skills("machine  learning", &list).present.len(), 0);
    }

    #[test]
    fn test_empty_skill_list_scores_zero() {
        let result = match_skills("anything at all", &[]);
        assert!(result.present.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let list = skills(&["HTML", "CSS"]);
        let result = match_skills("", &list);
        assert!(result.present.is_empty());
        assert_eq!(result.missing, list);
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        // 1 of 3 = 33.333…
        let result = match_skills("git", &skills(&["Git", "Go", "Rust"]));
        assert_eq!(result.percentage, 33.33);
        // 2 of 3 = 66.666…
        let result = match_skills("git rust", &skills(&["Git", "Elixir", "Rust"]));
        assert_eq!(result.percentage, 66.67);
    }

    #[test]
    fn test_percentage_ties_round_to_even() {
        let list: Vec<String> = (0..32).map(|i| format!("skill{i:02}")).collect();
        // 1 of 32 = 3.125 exactly
        let result = match_skills("skill07 only", &list);
        assert_eq!(result.present, vec!["skill07"]);
        assert_eq!(result.percentage, 3.12);
    }

    #[test]
    fn test_all_present_is_hundred() {
        let result = match_skills("HTML and CSS", &skills(&["HTML", "CSS"]));
        assert_eq!(result.percentage, 100.0);
        assert!(result.missing.is_empty());
    }
}
