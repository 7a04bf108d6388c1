use serde::Serialize;
use ts_rs::TS;

use super::entities::{Assignment, Course, Material};
use crate::models::quizzes::entities::Quiz;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<Course>,
}

/// 某一周的学习资料
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct WeekMaterials {
    pub week_number: i32,
    pub materials: Vec<Material>,
}

/// 课程详情：资料按周分组，附作业与测验
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseDetailResponse {
    pub course: Course,
    pub weeks: Vec<WeekMaterials>,
    pub assignments: Vec<Assignment>,
    pub quizzes: Vec<Quiz>,
}

/// 将资料按周号分组，周号升序，组内保持原有顺序
pub fn group_by_week(materials: Vec<Material>) -> Vec<WeekMaterials> {
    let mut weeks: std::collections::BTreeMap<i32, Vec<Material>> = Default::default();
    for material in materials {
        weeks.entry(material.week_number).or_default().push(material);
    }
    weeks
        .into_iter()
        .map(|(week_number, materials)| WeekMaterials {
            week_number,
            materials,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::MaterialType;

    fn material(id: i64, week: i32) -> Material {
        Material {
            id,
            course_code: "CS101".into(),
            title: format!("Lecture {id}"),
            material_type: MaterialType::Pdf,
            url: format!("https://cdn.example.edu/{id}.pdf"),
            week_number: week,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_group_by_week_orders_weeks() {
        let grouped = group_by_week(vec![material(1, 3), material(2, 1), material(3, 3)]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].week_number, 1);
        assert_eq!(grouped[1].week_number, 3);
        let ids: Vec<i64> = grouped[1].materials.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_group_by_week_empty() {
        assert!(group_by_week(Vec::new()).is_empty());
    }

    #[test]
    fn test_material_type_wire_names() {
        assert_eq!(serde_json::to_string(&MaterialType::Pdf).unwrap(), "\"PDF\"");
        assert_eq!("Video".parse::<MaterialType>(), Ok(MaterialType::Video));
    }
}
