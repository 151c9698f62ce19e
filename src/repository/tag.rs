use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag};
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn get_tag_by_name(&self, name: &str) -> RepositoryResult<Option<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let tag = tags::table
            .filter(tags::name.eq(name))
            .first::<DbTag>(&mut conn)
            .optional()?;

        Ok(tag.map(DomainTag::from))
    }
}

impl TagWriter for DieselRepository {
    fn ensure_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        if let Some(existing) = tags::table
            .filter(tags::name.eq(&new_tag.name))
            .first::<DbTag>(&mut conn)
            .optional()?
        {
            return Ok(existing.into());
        }

        let insertable = DbNewTag::from(new_tag);

        match diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)
        {
            Ok(created) => Ok(created.into()),
            // A concurrent writer got there first; hand back its row.
            Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                let existing = tags::table
                    .filter(tags::name.eq(&new_tag.name))
                    .first::<DbTag>(&mut conn)
                    .optional()?
                    .ok_or(RepositoryError::Conflict)?;
                Ok(existing.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
