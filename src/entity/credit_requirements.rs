//! 学分要求实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "credit_requirements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub category: String,
    pub min_credits: f64,
    pub studied: f64,
    pub earned: f64,
    pub to_be_earned: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_requirement(self) -> crate::models::grades::entities::CreditRequirement {
        crate::models::grades::entities::CreditRequirement {
            id: self.id,
            student_id: self.student_id,
            category: self.category,
            min_credits: self.min_credits,
            studied: self.studied,
            earned: self.earned,
            to_be_earned: self.to_be_earned,
        }
    }
}
