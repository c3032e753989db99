// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow
// ABOUTME: Helper modules for clinicflow-cli
// ABOUTME: Output formatting shared by the commands

pub mod display;
