// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Mapped Entities
//!
//! Record shapes for every table the data layer binds, each carrying its
//! static [`EntityConfig`].
//!
//! Keyless staging/import tables (`legacy`, `staging`) are flat records of
//! nullable strings, populated by external ETL and never addressed per row.
//! Keyed tables (`warmup`, `command_struct`) have a database-generated
//! `Id` and one-to-many children removed by cascading deletes.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Entity record types and the registry of table mappings

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::any::AnyRow;
use sqlx::FromRow;

use crate::domain::schema::EntityConfig;

pub use command_struct::{TestCommandStruct, TestCommandStructChain};
pub use legacy::{AfrcOracleDbaUsersData, MilpdsMemberData, PalData};
pub use staging::{
    ImpLodDisposition, ImpLodFinding, ImpLodRwoa, ImpPersonProcess, ImpProcess,
    ImpProcessValidStatus, ImpUnitData,
};
pub use warmup::{ApplicationWarmupProcess, ApplicationWarmupProcessLog, WarmupOutcome};

/// A bindable column value, in the order of [`EntityConfig::insertable_columns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(Option<String>),
    BigInt(Option<i64>),
}

/// A record type mapped onto one table.
pub trait Entity: for<'r> FromRow<'r, AnyRow> + Send + Sync + Unpin + 'static {
    fn config() -> &'static EntityConfig;

    /// Values for every insertable column, in declaration order.
    fn values(&self) -> Vec<SqlValue>;
}

/// An entity with a database-generated identity.
pub trait KeyedEntity: Entity {
    /// `None` until the row has been inserted.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    fn with_id(mut self, id: i64) -> Self
    where
        Self: Sized,
    {
        self.set_id(id);
        self
    }
}

/// Every table mapping, parents before children.
pub fn registry() -> Vec<&'static EntityConfig> {
    vec![
        AfrcOracleDbaUsersData::config(),
        PalData::config(),
        MilpdsMemberData::config(),
        ImpUnitData::config(),
        ImpLodDisposition::config(),
        ImpLodFinding::config(),
        ImpLodRwoa::config(),
        ImpProcess::config(),
        ImpProcessValidStatus::config(),
        ImpPersonProcess::config(),
        ApplicationWarmupProcess::config(),
        ApplicationWarmupProcessLog::config(),
        TestCommandStruct::config(),
        TestCommandStructChain::config(),
    ]
}

/// Timestamps are stored as RFC 3339 text with nanosecond precision.
pub fn encode_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// Declares a keyless staging record: every column is an optional string
/// with a bounded length, optionally `.fixed()` and/or `.unicode()`.
macro_rules! staging_entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $table:literal {
            $( $field:ident : $column:literal => $len:literal $(. $modifier:ident ())* ),+ $(,)?
        }
        indexes: [ $( $index:literal => [ $( $icol:literal ),+ ] ),* $(,)? ]
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq,
            serde::Serialize, serde::Deserialize, sqlx::FromRow,
        )]
        pub struct $name {
            $(
                #[sqlx(rename = $column)]
                #[serde(rename = $column)]
                pub $field: Option<String>,
            )+
        }

        impl $name {
            pub const CONFIG: $crate::domain::schema::EntityConfig =
                $crate::domain::schema::EntityConfig {
                    table: $table,
                    schema: $crate::domain::schema::DEFAULT_SCHEMA,
                    key: $crate::domain::schema::KeyDef::Keyless,
                    columns: &[
                        $( $crate::domain::schema::ColumnDef::text($column, $len) $(. $modifier ())* ),+
                    ],
                    indexes: &[
                        $( $crate::domain::schema::IndexDef::non_clustered($index, &[ $( $icol ),+ ]) ),*
                    ],
                    foreign_keys: &[],
                };
        }

        impl $crate::domain::entities::Entity for $name {
            fn config() -> &'static $crate::domain::schema::EntityConfig {
                &Self::CONFIG
            }

            fn values(&self) -> Vec<$crate::domain::entities::SqlValue> {
                vec![ $( $crate::domain::entities::SqlValue::Text(self.$field.clone()) ),+ ]
            }
        }
    };
}

// Must follow `staging_entity!`.
pub mod command_struct;
pub mod legacy;
pub mod staging;
pub mod warmup;
