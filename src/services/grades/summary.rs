//! 学期绩点 (SGPA) 与累计绩点 (CGPA)
//!
//! 两者都是学分加权平均：Σ(credits × grade_points) / Σcredits，保留两位小数。
//! 结果只用于展示，不写回数据库。

use std::collections::BTreeMap;

use crate::models::grades::entities::GradeRecord;
use crate::models::grades::responses::SemesterSummary;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 返回 (总学分, 总绩点, 加权平均)，总学分为 0 时平均为 0
pub fn weighted_average<'a>(rows: impl IntoIterator<Item = &'a GradeRecord>) -> (f64, f64, f64) {
    let (credits, points) = rows.into_iter().fold((0.0, 0.0), |(c, p), row| {
        (c + row.credits, p + row.credits * row.grade_points)
    });
    let gpa = if credits > 0.0 {
        round2(points / credits)
    } else {
        0.0
    };
    (credits, points, gpa)
}

/// 按学期升序汇总
pub fn summarize_semesters(grades: &[GradeRecord]) -> Vec<SemesterSummary> {
    let mut by_semester: BTreeMap<i32, Vec<&GradeRecord>> = BTreeMap::new();
    for grade in grades {
        by_semester.entry(grade.semester).or_default().push(grade);
    }

    by_semester
        .into_iter()
        .map(|(semester, rows)| {
            let (total_credits, total_points, sgpa) = weighted_average(rows);
            SemesterSummary {
                semester,
                total_credits,
                total_points,
                sgpa,
            }
        })
        .collect()
}

pub fn cgpa(grades: &[GradeRecord]) -> f64 {
    weighted_average(grades).2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(semester: i32, credits: f64, points: f64) -> GradeRecord {
        GradeRecord {
            id: 0,
            student_id: 1,
            semester,
            course_code: format!("C{semester}{credits}"),
            course_name: "Course".into(),
            credits,
            grade_points: points,
            grade: "A".into(),
            category: "Core".into(),
            exam_month_year: "NOV 2024".into(),
        }
    }

    #[test]
    fn test_sgpa_known_value() {
        let rows = vec![grade(1, 3.0, 8.0), grade(1, 4.0, 9.0)];
        let summary = summarize_semesters(&rows);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total_credits, 7.0);
        assert_eq!(summary[0].total_points, 60.0);
        assert_eq!(summary[0].sgpa, 8.57);
        assert_eq!(cgpa(&rows), 8.57);
    }

    #[test]
    fn test_reorder_invariance() {
        let rows = vec![
            grade(2, 4.0, 7.0),
            grade(1, 3.0, 8.0),
            grade(1, 4.0, 9.0),
            grade(2, 2.0, 10.0),
            grade(3, 1.0, 6.0),
        ];
        let mut reversed = rows.clone();
        reversed.reverse();
        let mut rotated = rows.clone();
        rotated.rotate_left(2);

        let expected = summarize_semesters(&rows);
        assert_eq!(summarize_semesters(&reversed), expected);
        assert_eq!(summarize_semesters(&rotated), expected);
        assert_eq!(cgpa(&reversed), cgpa(&rows));
        assert_eq!(cgpa(&rotated), cgpa(&rows));
    }

    #[test]
    fn test_matches_weighted_formula() {
        let rows = vec![grade(1, 3.0, 8.0), grade(2, 4.0, 9.0), grade(2, 5.0, 5.0)];
        let credits: f64 = rows.iter().map(|r| r.credits).sum();
        let points: f64 = rows.iter().map(|r| r.credits * r.grade_points).sum();
        assert_eq!(cgpa(&rows), round2(points / credits));
    }

    #[test]
    fn test_semesters_sorted_ascending() {
        let rows = vec![grade(4, 3.0, 8.0), grade(2, 3.0, 8.0), grade(3, 3.0, 8.0)];
        let order: Vec<i32> = summarize_semesters(&rows).iter().map(|s| s.semester).collect();
        assert_eq!(order, vec![2, 3, 4]);
    }

    #[test]
    fn test_zero_credits() {
        assert_eq!(cgpa(&[]), 0.0);
        assert_eq!(summarize_semesters(&[grade(1, 0.0, 9.0)])[0].sgpa, 0.0);
    }
}
