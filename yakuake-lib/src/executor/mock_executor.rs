use anyhow::Result;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::PathBuf;

use crate::commands::call::RemoteCall;
use crate::commands::launch::LaunchCommand;
use crate::commands::list_services::ListServicesCommand;
use crate::executor::CommandExecutor;
use crate::types::{IpcEndpoint, IpcEndpoints, IpcTechnology, RemoteCallResult};

/// Records every request and replays queued responses.
///
/// Unqueued requests succeed with empty output. Remote call responses are
/// queued per method name and consumed in order.
#[derive(Debug)]
pub struct MockExecutor {
    pub endpoints: IpcEndpoints,
    pub programs: RefCell<HashSet<String>>,
    pub find_program_calls: RefCell<Vec<String>>,
    pub list_services_calls: RefCell<Vec<ListServicesCommand>>,
    pub remote_calls: RefCell<Vec<RemoteCall>>,
    pub launch_calls: RefCell<Vec<LaunchCommand>>,
    pub list_services_responses: RefCell<VecDeque<Result<RemoteCallResult>>>,
    pub call_responses: RefCell<HashMap<String, VecDeque<Result<RemoteCallResult>>>>,
    pub launch_responses: RefCell<VecDeque<Result<()>>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            endpoints: IpcEndpoints::default(),
            programs: RefCell::new(HashSet::new()),
            find_program_calls: RefCell::new(Vec::new()),
            list_services_calls: RefCell::new(Vec::new()),
            remote_calls: RefCell::new(Vec::new()),
            launch_calls: RefCell::new(Vec::new()),
            list_services_responses: RefCell::new(VecDeque::new()),
            call_responses: RefCell::new(HashMap::new()),
            launch_responses: RefCell::new(VecDeque::new()),
        }
    }

    pub fn with_programs(programs: &[&str]) -> Self {
        let executor = Self::new();
        for program in programs {
            executor.install_program(program);
        }
        executor
    }

    pub fn install_program(&self, program: &str) {
        self.programs.borrow_mut().insert(program.to_string());
    }

    pub fn expect_list_services_response(&self, response: Result<RemoteCallResult>) {
        self.list_services_responses.borrow_mut().push_back(response);
    }

    pub fn expect_call_response(&self, method: &str, response: Result<RemoteCallResult>) {
        self.call_responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn expect_launch_response(&self, response: Result<()>) {
        self.launch_responses.borrow_mut().push_back(response);
    }

    pub fn list_services_call_count(&self) -> usize {
        self.list_services_calls.borrow().len()
    }

    pub fn remote_call_count(&self) -> usize {
        self.remote_calls.borrow().len()
    }

    pub fn launch_call_count(&self) -> usize {
        self.launch_calls.borrow().len()
    }

    pub fn get_remote_calls(&self) -> Vec<RemoteCall> {
        self.remote_calls.borrow().clone()
    }

    pub fn get_launch_calls(&self) -> Vec<LaunchCommand> {
        self.launch_calls.borrow().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<RemoteCall> {
        self.remote_calls
            .borrow()
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls_to(method).len()
    }
}

impl CommandExecutor for MockExecutor {
    fn endpoint(&self, technology: IpcTechnology) -> &IpcEndpoint {
        self.endpoints.get(technology)
    }

    fn find_program(&self, program: &str) -> Option<PathBuf> {
        self.find_program_calls.borrow_mut().push(program.to_string());
        self.programs
            .borrow()
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }

    fn list_services(&self, command: ListServicesCommand) -> Result<RemoteCallResult> {
        self.list_services_calls.borrow_mut().push(command);
        self.list_services_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(RemoteCallResult::success_empty()))
    }

    fn call(&self, command: RemoteCall) -> Result<RemoteCallResult> {
        let queued = self
            .call_responses
            .borrow_mut()
            .get_mut(&command.method)
            .and_then(|responses| responses.pop_front());
        self.remote_calls.borrow_mut().push(command);
        queued.unwrap_or_else(|| Ok(RemoteCallResult::success_empty()))
    }

    fn launch(&self, command: LaunchCommand) -> Result<()> {
        self.launch_calls.borrow_mut().push(command);
        self.launch_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}
