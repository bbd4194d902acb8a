use ssm_api::commands::{
    CommandInvocationStatus, GetCommandInvocationInput, SendCommandInput, Target,
};
use ssm_api::inventory::{DescribeInstanceInformationInput, InstanceInformationStringFilter};
use ssm_api::sessions::{StartSessionInput, TerminateSessionInput};
use ssm_api::{ErrorCode, SsmApi, SsmError};
use ssm_mock::fixtures::{
    BAD_COMMAND_ID, FIRST_PAGE_TOKEN, NOT_CONNECTED_TARGET, READY_SESSION_ID, READY_TARGET,
    SENT_COMMAND_ID, SUCCESS_COMMAND_ID, TERMINATE_ERROR_SESSION_ID, TERMINATE_ERROR_TARGET,
};

fn instance_ids(list: &[ssm_api::inventory::InstanceInformation]) -> Vec<String> {
    list.iter()
        .filter_map(|instance| instance.instance_id.clone())
        .collect()
}

/// Start on a ready target, then terminate the session that was handed out.
pub fn test_session_round_trip<C: SsmApi>(ssm: C) {
    let started = ssm
        .start_session(&StartSessionInput::new(READY_TARGET))
        .expect("ready target starts");
    let session_id = started.session_id.expect("session id populated");
    assert_eq!(session_id, READY_SESSION_ID);

    let terminated = ssm
        .terminate_session(&TerminateSessionInput::new(session_id.clone()))
        .expect("ready session terminates");
    assert_eq!(terminated.session_id, Some(session_id));
}

/// A session that opens fine but fails on teardown.
pub fn test_session_fails_on_terminate<C: SsmApi>(ssm: C) {
    let started = ssm
        .start_session(&StartSessionInput::new(TERMINATE_ERROR_TARGET))
        .expect("start succeeds");
    let session_id = started.session_id.expect("session id populated");
    assert_eq!(session_id, TERMINATE_ERROR_SESSION_ID);

    let err = ssm
        .terminate_session(&TerminateSessionInput::new(session_id))
        .expect_err("terminate fails");
    assert_eq!(
        err.output.session_id.as_deref(),
        Some(TERMINATE_ERROR_SESSION_ID)
    );
    assert!(err.error.is_code(ErrorCode::DoesNotExistException));
    assert!(err.to_string().contains("rate limits"));
}

pub fn test_not_connected_target<C: SsmApi>(ssm: C) {
    let err = ssm
        .start_session(&StartSessionInput::new(NOT_CONNECTED_TARGET))
        .expect_err("permission failure");
    assert!(err.is_code(ErrorCode::TargetNotConnected));
}

pub fn test_unknown_targets_start_without_session_id<C: SsmApi>(ssm: C) {
    for target in ["i-999", "", "ready-instance-id", "i-123 "] {
        let output = ssm
            .start_session(&StartSessionInput::new(target))
            .expect("unknown target is not an error");
        assert_eq!(output.session_id, None, "target {target:?}");
    }
}

/// Submit a command, then poll the status fixtures the way a runner would.
pub fn test_send_then_poll<C: SsmApi>(ssm: C) {
    let mut input = SendCommandInput::new("AWS-RunShellScript");
    input.instance_ids.push(READY_TARGET.to_string());
    input.comment = Some("nightly patch".to_string());
    let sent = ssm.send_command(&input).expect("send succeeds");
    let command = sent.command.expect("command echoed");
    assert_eq!(command.command_id, SENT_COMMAND_ID);
    assert_eq!(command.comment.as_deref(), Some("nightly patch"));

    // Submitting again hands out the same id.
    let again = ssm.send_command(&input).expect("send succeeds");
    assert_eq!(again.command.expect("command echoed").command_id, SENT_COMMAND_ID);

    let status = ssm
        .get_command_invocation(&GetCommandInvocationInput::new(SUCCESS_COMMAND_ID, READY_TARGET))
        .expect("status lookup");
    assert_eq!(status.status_details, Some(CommandInvocationStatus::Success));
    assert!(status.status_details.is_some_and(CommandInvocationStatus::is_terminal));
}

pub fn test_invalid_command_id<C: SsmApi>(ssm: C) {
    let err = ssm
        .get_command_invocation(&GetCommandInvocationInput::new(BAD_COMMAND_ID, READY_TARGET))
        .expect_err("bad id fails");
    assert!(err.is_code(ErrorCode::InvalidCommandId));
}

pub fn test_conflicting_selectors<C: SsmApi>(ssm: C) {
    let mut input = SendCommandInput::new("AWS-RunShellScript");
    input.instance_ids.push(READY_TARGET.to_string());
    input.targets.push(Target::new("tag:Role", ["web"]));
    let err = ssm.send_command(&input).expect_err("conflicting selectors");
    assert!(matches!(err, SsmError::Validation(_)));

    // Targets alone are fine.
    input.instance_ids.clear();
    let sent = ssm.send_command(&input).expect("targets only");
    assert_eq!(sent.command.expect("command echoed").targets, input.targets);
}

pub fn test_single_pages<C: SsmApi>(ssm: C) {
    let first = ssm
        .describe_instance_information(&DescribeInstanceInformationInput::default())
        .expect("first page");
    assert_eq!(
        instance_ids(&first.instance_information_list),
        vec!["i-23456", "i-45678", "i-78901", "i-98765"]
    );
    assert_eq!(first.next_token.as_deref(), Some(FIRST_PAGE_TOKEN));

    let second = ssm
        .describe_instance_information(&DescribeInstanceInformationInput {
            next_token: first.next_token,
            ..Default::default()
        })
        .expect("second page");
    assert_eq!(
        instance_ids(&second.instance_information_list),
        vec!["i-12345", "i-34567", "i-67890"]
    );
    assert_eq!(second.next_token, None);
}

/// The callback driver visits both pages and flags only the second as last.
pub fn test_paginate_full_inventory<C: SsmApi>(ssm: C) {
    let mut flags = Vec::new();
    let mut seen = Vec::new();
    ssm.describe_instance_information_pages(
        &DescribeInstanceInformationInput::default(),
        &mut |page, last_page| {
            flags.push(last_page);
            seen.extend(instance_ids(&page.instance_information_list));
            true
        },
    )
    .expect("pagination succeeds");

    assert_eq!(flags, vec![false, true]);
    assert_eq!(seen.len(), 7);
}

pub fn test_paginate_stops_on_request<C: SsmApi>(ssm: C) {
    let mut visits = 0;
    ssm.describe_instance_information_pages(
        &DescribeInstanceInformationInput::default(),
        &mut |_, _| {
            visits += 1;
            false
        },
    )
    .expect("pagination succeeds");
    assert_eq!(visits, 1);
}

/// Filters apply to every page; an unmatched page is empty, not an error.
pub fn test_paginate_with_filter<C: SsmApi>(ssm: C) {
    let input = DescribeInstanceInformationInput::default()
        .with_filter(InstanceInformationStringFilter::new("PlatformTypes", ["Windows"]));
    let mut windows = Vec::new();
    ssm.describe_instance_information_pages(&input, &mut |page, _| {
        windows.extend(instance_ids(&page.instance_information_list));
        true
    })
    .expect("pagination succeeds");
    assert_eq!(windows, vec!["i-78901", "i-67890"]);

    let offline = DescribeInstanceInformationInput::default()
        .with_filter(InstanceInformationStringFilter::new("PingStatus", ["Offline"]));
    let pages: Vec<_> = ssm
        .instance_information_pages(&offline)
        .collect::<Result<_, _>>()
        .expect("pagination succeeds");
    assert_eq!(pages.len(), 2);
    assert_eq!(
        instance_ids(&pages[0].instance_information_list),
        vec!["i-23456", "i-78901"]
    );
    assert!(pages[1].instance_information_list.is_empty());

    // Values are matched against the wire dump, so an attribute name keeps
    // every record that carries the attribute.
    let by_name = DescribeInstanceInformationInput::default()
        .with_filter(InstanceInformationStringFilter::new("PingStatus", ["PingStatus"]));
    let page = ssm
        .describe_instance_information(&by_name)
        .expect("first page");
    assert_eq!(page.instance_information_list.len(), 4);
}
