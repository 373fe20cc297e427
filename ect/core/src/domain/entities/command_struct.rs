// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Test command structure: units and their chain-of-command links, used to
//! exercise routing against a synthetic hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

use super::{decode_timestamp, encode_timestamp, Entity, KeyedEntity, SqlValue};
use crate::domain::schema::{
    ColumnDef, EntityConfig, ForeignKeyDef, IndexDef, KeyDef, DEFAULT_SCHEMA,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCommandStruct {
    pub id: Option<i64>,
    pub name: String,
    pub pas_code: Option<String>,
    pub unit_level: Option<String>,
    pub component: Option<String>,
}

impl TestCommandStruct {
    pub const CONFIG: EntityConfig = EntityConfig {
        table: "TestCommandStruct",
        schema: DEFAULT_SCHEMA,
        key: KeyDef::Identity("Id"),
        columns: &[
            ColumnDef::big_int("Id").required(),
            ColumnDef::text("Name", 100).unicode().required(),
            ColumnDef::text("PasCode", 4).fixed(),
            ColumnDef::text("UnitLevel", 10),
            ColumnDef::text("Component", 1).fixed(),
        ],
        indexes: &[IndexDef::non_clustered("IX_TestCommandStruct_PasCode", &["PasCode"])],
        foreign_keys: &[],
    };
}

impl<'r> FromRow<'r, AnyRow> for TestCommandStruct {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get("Id")?),
            name: row.try_get("Name")?,
            pas_code: row.try_get("PasCode")?,
            unit_level: row.try_get("UnitLevel")?,
            component: row.try_get("Component")?,
        })
    }
}

impl Entity for TestCommandStruct {
    fn config() -> &'static EntityConfig {
        &Self::CONFIG
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(Some(self.name.clone())),
            SqlValue::Text(self.pas_code.clone()),
            SqlValue::Text(self.unit_level.clone()),
            SqlValue::Text(self.component.clone()),
        ]
    }
}

impl KeyedEntity for TestCommandStruct {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// One link in a unit's chain of command, by chain type (e.g. "LOD", "PH").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCommandStructChain {
    pub id: Option<i64>,
    pub command_struct_id: i64,
    pub chain_type: String,
    pub parent_command_struct_id: Option<i64>,
    pub modified_by: Option<String>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl TestCommandStructChain {
    pub const CONFIG: EntityConfig = EntityConfig {
        table: "TestCommandStructChain",
        schema: DEFAULT_SCHEMA,
        key: KeyDef::Identity("Id"),
        columns: &[
            ColumnDef::big_int("Id").required(),
            ColumnDef::big_int("CommandStructId").required(),
            ColumnDef::text("ChainType", 10).required(),
            ColumnDef::big_int("ParentCommandStructId"),
            ColumnDef::text("ModifiedBy", 50),
            ColumnDef::timestamp("ModifiedAt"),
        ],
        indexes: &[IndexDef::non_clustered(
            "IX_TestCommandStructChain_CommandStructId",
            &["CommandStructId", "ChainType"],
        )],
        foreign_keys: &[ForeignKeyDef::cascade("CommandStructId", "TestCommandStruct", "Id")],
    };
}

impl<'r> FromRow<'r, AnyRow> for TestCommandStructChain {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let modified_at: Option<String> = row.try_get("ModifiedAt")?;
        Ok(Self {
            id: Some(row.try_get("Id")?),
            command_struct_id: row.try_get("CommandStructId")?,
            chain_type: row.try_get("ChainType")?,
            parent_command_struct_id: row.try_get("ParentCommandStructId")?,
            modified_by: row.try_get("ModifiedBy")?,
            modified_at: modified_at.as_deref().map(decode_timestamp).transpose()?,
        })
    }
}

impl Entity for TestCommandStructChain {
    fn config() -> &'static EntityConfig {
        &Self::CONFIG
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(Some(self.command_struct_id)),
            SqlValue::Text(Some(self.chain_type.clone())),
            SqlValue::BigInt(self.parent_command_struct_id),
            SqlValue::Text(self.modified_by.clone()),
            SqlValue::Text(self.modified_at.as_ref().map(encode_timestamp)),
        ]
    }
}

impl KeyedEntity for TestCommandStructChain {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
