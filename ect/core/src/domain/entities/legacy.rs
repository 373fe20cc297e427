// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Legacy feed tables: Oracle DBA user view, personnel accounting data and
//! the MILPDS member extract.

staging_entity! {
    /// Snapshot of the AFRC Oracle `DBA_USERS` view.
    pub struct AfrcOracleDbaUsersData => "AfrcOracle_DBA_Users_Data" {
        username: "USERNAME" => 30,
        user_id: "USER_ID" => 20,
        account_status: "ACCOUNT_STATUS" => 32,
        lock_date: "LOCK_DATE" => 30,
        expiry_date: "EXPIRY_DATE" => 30,
        default_tablespace: "DEFAULT_TABLESPACE" => 30,
        created: "CREATED" => 30,
        profile: "PROFILE" => 30,
    }
    indexes: [
        "IX_AfrcOracle_DBA_Users_Data_USERNAME" => ["USERNAME"],
    ]
}

staging_entity! {
    /// Personnel accounting listing.
    pub struct PalData => "PAL_DATA" {
        ssn: "SSN" => 9.fixed(),
        last_name: "LAST_NAME" => 50,
        first_name: "FIRST_NAME" => 50,
        middle_name: "MIDDLE_NAME" => 50,
        grade: "GRADE" => 10,
        pas_code: "PAS_CODE" => 4.fixed(),
        duty_afsc: "DUTY_AFSC" => 10,
        duty_phone: "DUTY_PHONE" => 20,
        duty_status: "DUTY_STATUS" => 10,
        email: "EMAIL" => 100,
    }
    indexes: [
        "IX_PAL_DATA_SSN" => ["SSN"],
        "IX_PAL_DATA_PAS_CODE" => ["PAS_CODE"],
    ]
}

staging_entity! {
    /// Military personnel data system member extract.
    pub struct MilpdsMemberData => "MILPDS_MEMBER_DATA" {
        ssan: "SSAN" => 9.fixed(),
        name: "NAME" => 100.unicode(),
        grade: "GR_CURR" => 6,
        pas: "PAS" => 8,
        component: "COMP" => 1.fixed(),
        date_of_birth: "DOB" => 8,
        unit: "UNIT" => 100,
        office_symbol: "OFFICE_SYMBOL" => 20,
        home_address: "ADRS_MAIL_HOME" => 200.unicode(),
        home_phone: "HOME_PHONE" => 20,
        sex: "SEX_SVC_MBR" => 1.fixed(),
        attached_pas: "ATTACH_PAS" => 8,
    }
    indexes: [
        "IX_MILPDS_MEMBER_DATA_SSAN" => ["SSAN"],
    ]
}
