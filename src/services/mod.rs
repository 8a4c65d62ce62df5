pub mod transport;
pub mod api_client;
pub mod auth_service;
pub mod employee_service;
pub mod department_service;
pub mod position_service;
pub mod salary_service;
pub mod attendance_service;
pub mod payroll_service;
pub mod company_service;
pub mod recruitment_service;

#[cfg(test)]
pub(crate) mod mock_transport;

pub use transport::{default_transport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
#[cfg(target_arch = "wasm32")]
pub use transport::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
pub use api_client::{ApiClient, RefreshOutcome, RequestOptions};
pub use auth_service::AuthService;
pub use employee_service::EmployeeService;
pub use department_service::DepartmentService;
pub use position_service::PositionService;
pub use salary_service::SalaryService;
pub use attendance_service::AttendanceService;
pub use payroll_service::PayrollService;
pub use company_service::CompanyService;
pub use recruitment_service::RecruitmentService;

/// Every domain service, built over one shared client
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    pub positions: PositionService,
    pub salary: SalaryService,
    pub attendance: AttendanceService,
    pub payroll: PayrollService,
    pub company: CompanyService,
    pub recruitment: RecruitmentService,
}

impl Services {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            employees: EmployeeService::new(client.clone()),
            departments: DepartmentService::new(client.clone()),
            positions: PositionService::new(client.clone()),
            salary: SalaryService::new(client.clone()),
            attendance: AttendanceService::new(client.clone()),
            payroll: PayrollService::new(client.clone()),
            company: CompanyService::new(client.clone()),
            recruitment: RecruitmentService::new(client),
        }
    }
}
