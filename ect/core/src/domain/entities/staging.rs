// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! ALOD import staging tables.
//!
//! Rows are loaded in bulk by the conversion jobs, read back for
//! reconciliation and cleared before the next load. None of them has a key.

staging_entity! {
    /// Unit and PAS hierarchy.
    pub struct ImpUnitData => "ImpUnitData" {
        cs_id: "CS_ID" => 20,
        long_name: "LONG_NAME" => 100.unicode(),
        pas_code: "PAS_CODE" => 4.fixed(),
        uic: "UIC" => 6,
        cs_level: "CS_LEVEL" => 10,
        parent_cs_id: "PARENT_CS_ID" => 20,
        component: "COMPONENT" => 1.fixed(),
        gaining_command: "GAINING_COMMAND" => 10,
        address1: "ADDRESS1" => 100,
        city: "CITY" => 50,
        state: "STATE" => 2.fixed(),
        postal_code: "POSTAL_CODE" => 10,
        time_zone: "TIME_ZONE" => 10,
    }
    indexes: [
        "IX_ImpUnitData_PAS_CODE" => ["PAS_CODE"],
    ]
}

staging_entity! {
    pub struct ImpLodDisposition => "ImpLodDisposition" {
        lod_id: "LODID" => 20,
        disposition: "DISPOSITION" => 100,
        finding: "FINDING" => 50,
        approving_authority: "APPROVING_AUTHORITY" => 100,
        date_completed: "DATE_COMPLETED" => 30,
        modified_by: "MODIFIED_BY" => 50,
    }
    indexes: [
        "IX_ImpLodDisposition_LODID" => ["LODID"],
    ]
}

staging_entity! {
    /// One finding per reviewing role on an ALOD case.
    pub struct ImpLodFinding => "ImpLodFindings" {
        lod_id: "LODID" => 20,
        person_type: "PERSON_TYPE" => 20,
        finding: "FINDING" => 50,
        explanation: "EXPLANATION" => 4000.unicode(),
        decision: "DECISION_YN" => 1.fixed(),
        ssn: "SSN" => 9.fixed(),
        name: "NAME" => 100.unicode(),
        grade: "GRADE" => 10,
        created_by: "CREATED_BY" => 50,
        created_date: "CREATED_DATE" => 30,
    }
    indexes: [
        "IX_ImpLodFindings_LODID" => ["LODID", "PERSON_TYPE"],
    ]
}

staging_entity! {
    /// Returned-without-action history.
    pub struct ImpLodRwoa => "ImpLodRwoa" {
        lod_id: "LODID" => 20,
        rwoa_id: "RWOA_ID" => 20,
        reason_sent_back: "REASON_SENT_BACK" => 200,
        explanation: "EXPLANATION_FOR_SENDING_BACK" => 4000.unicode(),
        sender: "SENDER" => 100,
        date_sent: "DATE_SENT" => 30,
        workstatus: "WORKSTATUS" => 50,
        return_to_group: "RETURN_TO_GROUP" => 50,
    }
    indexes: []
}

staging_entity! {
    pub struct ImpProcess => "ImpProcess" {
        process_id: "PROCESS_ID" => 20,
        process_name: "PROCESS_NAME" => 100,
        module_id: "MODULE_ID" => 10,
        workflow_id: "WORKFLOW_ID" => 20,
        status_id: "STATUS_ID" => 20,
        created_date: "CREATED_DATE" => 30,
        created_by: "CREATED_BY" => 50,
    }
    indexes: []
}

staging_entity! {
    /// Statuses a staged process may legally be in.
    pub struct ImpProcessValidStatus => "ImpProcessValidStatus" {
        process_id: "PROCESS_ID" => 20,
        status_id: "STATUS_ID" => 20,
        status_description: "STATUS_DESCRIPTION" => 100,
        is_final: "IS_FINAL" => 1.fixed(),
        sort_order: "SORT_ORDER" => 10,
    }
    indexes: []
}

staging_entity! {
    pub struct ImpPersonProcess => "ImpPersonProcess" {
        person_id: "PERSON_ID" => 20,
        ssn: "SSN" => 9.fixed(),
        process_id: "PROCESS_ID" => 20,
        ref_id: "REF_ID" => 20,
        status_id: "STATUS_ID" => 20,
        start_date: "START_DATE" => 30,
        end_date: "END_DATE" => 30,
    }
    indexes: [
        "IX_ImpPersonProcess_PROCESS_ID" => ["PROCESS_ID"],
    ]
}
