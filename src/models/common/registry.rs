//! 资源登记表
//!
//! 路由注册与 OpenAPI 文档都通过 [`visit_resources`] 遍历同一份资源列表，
//! 新增资源只需在此处加一行。

use crate::models::{
    Resource,
    billing::entities::{Contract, Payment},
    centers::entities::{Announcement, Branch, EducationCenter},
    courses::entities::{Course, CourseTag, CourseTagMapping, Enrollment},
    engagement::entities::{Faq, Notification, Review, SearchHistory},
    geography::entities::{City, District, Subdistrict},
    users::entities::{User, UserRole, Worker},
};
use crate::storage::{CrudStorage, Storage};

pub trait ResourceVisitor {
    fn visit<R>(&mut self)
    where
        R: Resource,
        dyn Storage: CrudStorage<R>;
}

pub fn visit_resources<V: ResourceVisitor>(visitor: &mut V) {
    visitor.visit::<Announcement>();
    visitor.visit::<Branch>();
    visitor.visit::<City>();
    visitor.visit::<Contract>();
    visitor.visit::<Course>();
    visitor.visit::<CourseTag>();
    visitor.visit::<CourseTagMapping>();
    visitor.visit::<District>();
    visitor.visit::<EducationCenter>();
    visitor.visit::<Enrollment>();
    visitor.visit::<Faq>();
    visitor.visit::<Notification>();
    visitor.visit::<Payment>();
    visitor.visit::<Review>();
    visitor.visit::<SearchHistory>();
    visitor.visit::<Subdistrict>();
    visitor.visit::<User>();
    visitor.visit::<UserRole>();
    visitor.visit::<Worker>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Collect {
        paths: Vec<&'static str>,
    }

    impl ResourceVisitor for Collect {
        fn visit<R>(&mut self)
        where
            R: Resource,
            dyn Storage: CrudStorage<R>,
        {
            self.paths.push(R::PATH);
        }
    }

    #[test]
    fn test_all_resources_registered_once() {
        let mut collect = Collect::default();
        visit_resources(&mut collect);
        assert_eq!(collect.paths.len(), 19);
        let unique: HashSet<_> = collect.paths.iter().collect();
        assert_eq!(unique.len(), 19);
        assert!(collect.paths.contains(&"educenters"));
        assert!(collect.paths.contains(&"searchHistories"));
    }
}
