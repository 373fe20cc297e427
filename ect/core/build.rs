// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Build Script for ect-core
//!
//! Compiles the workflow service contract (`proto/ect/workflow/v1/*.proto`)
//! into gRPC client and server stubs.
//!
//! # Code Generation
//!
//! Uses `tonic-prost-build` with a vendored `protoc`. Generated code is placed in
//! `OUT_DIR` and included via `tonic::include_proto!` in
//! `src/infrastructure/workflow_client/proto.rs`.
//!
//! Every generated message derives `serde::Serialize` so request payloads can be
//! attached to audit events verbatim.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Implements internal responsibilities for build

const PROTO_ROOT: &str = "proto";

const PROTOS: &[&str] = &[
    "proto/ect/workflow/v1/common.proto",
    "proto/ect/workflow/v1/core_user.proto",
    "proto/ect/workflow/v1/core_workflow.proto",
    "proto/ect/workflow/v1/workflow.proto",
    "proto/ect/workflow/v1/workstatus.proto",
    "proto/ect/workflow/v1/application_warmup.proto",
    "proto/ect/workflow/v1/audit_logging.proto",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Point PROTOC at the vendored compiler so builds do not depend on the host
    std::env::set_var(
        "PROTOC",
        protoc_bin_vendored::protoc_bin_path().expect("vendored protoc is available"),
    );

    // Servers are generated too: the integration tests host an in-process mock
    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .type_attribute(".ect.workflow.v1", "#[derive(serde::Serialize)]")
        .compile_protos(PROTOS, &[PROTO_ROOT])?;

    for proto in PROTOS {
        println!("cargo:rerun-if-changed={}", proto);
    }

    Ok(())
}
