//! Built-in document templates.

/// Initial content of `design_logs/_summary.md`.
pub const SUMMARY: &str = "# Design Logs summary

This file contains a summary of design logs. Each log is documented by file name and a brief description.
The main purpose of this file is to provide a quick overview of the design logs for easy reference, without having to read the entire content of each log.

## Design Logs

";

/// Skeleton for a new design log.
pub const DESIGN_LOG: &str = "# Design Log

## Background

## Problem

## Questions and Answers

## Design

## Implementation Plan

## Examples

## Trade-offs

## Implementation Results
";

/// Skeleton for a new operation document.
pub const OPERATION: &str = "# Operation

## Goal

## Prerequisites

## Steps

## Verification

## Rollback

## Notes
";
