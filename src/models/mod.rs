pub mod session;
pub mod envelope;
pub mod auth;
pub mod employee;
pub mod organization;
pub mod salary;
pub mod attendance;
pub mod payroll;
pub mod company;
pub mod recruitment;

pub use session::{SessionSnapshot, SessionTokens, SessionUser};
pub use envelope::{ApiPayload, ListQuery, Page, Pagination};
pub use auth::{LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest};
pub use employee::{Employee, EmployeeUpdate, NewEmployee};
pub use organization::{Department, DepartmentInput, Position, PositionInput};
pub use salary::{SalaryInput, SalaryRecord};
pub use attendance::{AttendanceFilter, AttendanceRecord, AttendanceSummary, ClockRequest};
pub use payroll::{NewPayrollRun, PayrollRun, Payslip};
pub use company::{CompanyProfile, CompanyProfileUpdate, ExportKind, FileDownload};
pub use recruitment::{ApplicationUpdate, JobApplication, JobOpening, NewJobOpening};
