// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

// Generated messages, clients and servers for `ect.workflow.v1`.

tonic::include_proto!("ect.workflow.v1");
