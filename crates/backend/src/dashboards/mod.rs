pub mod context;
pub mod registry;

pub mod d101_ic_productivity;
pub mod d102_ic_performance_career;
pub mod d103_ic_learning_skills;
pub mod d104_ic_tasks;

pub mod d201_mgr_overview;
pub mod d202_mgr_team_productivity;
pub mod d203_mgr_employee_performance;
pub mod d204_mgr_learning_skills;
pub mod d205_mgr_engagement_compliance;

pub mod d301_org_executive_summary;
pub mod d302_org_productivity;
pub mod d303_org_performance;
pub mod d304_org_projects_portfolio;
pub mod d305_org_learning_skills;
pub mod d306_org_engagement_compliance;

pub mod d401_hr_overview;
pub mod d402_hr_engagement_compliance;
pub mod d403_hr_recruitment;
pub mod d404_hr_training;
pub mod d405_hr_demographics;
