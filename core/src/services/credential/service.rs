//! Main credential service implementation

use std::sync::Arc;
use tokio::time::timeout;
use tracing::{error, info, warn};

use hr_shared::validation::mask_email;

use crate::domain::entities::{messages, EmployeeDetails, NewEmployee};
use crate::domain::value_objects::{AdminIdentity, AuthenticatedUser, UserType};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{EmployeeRepository, NotificationRepository};
use crate::services::mail::{password_reset_mail, Mailer};
use crate::services::notification::NotificationService;
use crate::services::validation::{require, require_present};

use super::config::CredentialServiceConfig;
use super::password::{generate_temporary_password, hash_password, verify_password};

/// Registration request as received from the caller
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub details: EmployeeDetails,
}

/// Login request as received from the caller
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
}

/// What the forgot-password flow did
///
/// Callers should present both variants identically apart from wording;
/// neither reveals anything a caller could not already know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordResetOutcome {
    /// A new password was committed and mailed
    Sent,
    /// No employee has that email; nothing changed
    UnknownEmail,
}

/// Credential service for registration, login and password management
pub struct CredentialService<E, N, M>
where
    E: EmployeeRepository,
    N: NotificationRepository,
    M: Mailer + ?Sized,
{
    /// Employee repository for identity records
    employees: Arc<E>,
    /// Best-effort notification feed
    notifications: NotificationService<N>,
    /// Outbound mail for password resets
    mailer: Arc<M>,
    /// Service configuration
    config: CredentialServiceConfig,
}

impl<E, N, M> CredentialService<E, N, M>
where
    E: EmployeeRepository,
    N: NotificationRepository,
    M: Mailer + ?Sized,
{
    pub fn new(
        employees: Arc<E>,
        notifications: NotificationService<N>,
        mailer: Arc<M>,
        config: CredentialServiceConfig,
    ) -> Self {
        Self {
            employees,
            notifications,
            mailer,
            config,
        }
    }

    /// Register a new employee
    ///
    /// Returns the allocated `SSQ-<n>` id.
    ///
    /// # Errors
    ///
    /// * `ValidationError::RequiredField` - a required field is missing or blank
    /// * `DomainError::Conflict` - the email is already registered
    pub async fn register(&self, input: RegisterInput) -> DomainResult<String> {
        let first_name = require(input.first_name.as_deref(), "first_name")?;
        let last_name = require(input.last_name.as_deref(), "last_name")?;
        let email = require(input.email.as_deref(), "email")?;
        let password = require_present(input.password.as_deref(), "password")?;

        if self.employees.exists_by_email(email).await? {
            info!(email = %mask_email(email), "Registration rejected, email already registered");
            return Err(DomainError::Conflict {
                resource: format!("Employee with email {}", email),
            });
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;

        let employee = self
            .employees
            .create(NewEmployee {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                password_hash,
                details: input.details,
            })
            .await?;

        info!(employee_id = %employee.id, email = %mask_email(email), "Employee registered");
        Ok(employee.id)
    }

    /// Authenticate an admin or an employee
    ///
    /// The admin path compares against the configured pair only and never
    /// touches storage. The employee path refuses the admin email outright and
    /// reports the same error for an unknown account and a wrong password.
    pub async fn login(&self, input: LoginInput) -> DomainResult<AuthenticatedUser> {
        let raw_username = require_present(input.username.as_deref(), "username")?;
        let username = require(Some(raw_username), "username")?;
        let password = require_present(input.password.as_deref(), "password")?;
        let user_type: UserType = require(input.user_type.as_deref(), "user_type")?.parse()?;

        match user_type {
            UserType::Admin => {
                if !self.config.admin.matches(raw_username, password) {
                    warn!(username = %mask_email(username), "Admin login failed");
                    return Err(AuthError::InvalidAdminCredentials.into());
                }
                info!("Admin logged in");
                Ok(AuthenticatedUser::Admin(AdminIdentity::new(username)))
            }
            UserType::Employee => {
                if self.config.admin.is_reserved_email(username) {
                    warn!("Employee login attempted with the admin email");
                    return Err(AuthError::InvalidEmployeeCredentials.into());
                }

                let employee = match self.employees.find_by_email(username).await? {
                    Some(employee) => employee,
                    None => {
                        info!(username = %mask_email(username), "Employee login failed");
                        return Err(AuthError::InvalidEmployeeCredentials.into());
                    }
                };

                if !verify_password(password, &employee.password_hash).await? {
                    info!(employee_id = %employee.id, "Employee login failed");
                    return Err(AuthError::InvalidEmployeeCredentials.into());
                }

                info!(employee_id = %employee.id, "Employee logged in");
                Ok(AuthenticatedUser::Employee(employee.into_profile()))
            }
        }
    }

    /// Issue a new random password and mail it to the employee
    ///
    /// The password is committed before dispatch. A send failure or timeout
    /// after that point surfaces as `DomainError::MailDelivery` while the new
    /// password stays valid; asking again is the remedy.
    pub async fn forgot_password(&self, email: Option<&str>) -> DomainResult<PasswordResetOutcome> {
        let email = require(email, "email")?;

        let employee = match self.employees.find_by_email(email).await? {
            Some(employee) => employee,
            None => {
                info!(email = %mask_email(email), "Password reset requested for unknown email");
                return Ok(PasswordResetOutcome::UnknownEmail);
            }
        };

        let temporary_password = generate_temporary_password();
        let password_hash = hash_password(&temporary_password, self.config.bcrypt_cost).await?;

        if !self.employees.update_password(&employee.id, &password_hash).await? {
            return Ok(PasswordResetOutcome::UnknownEmail);
        }

        self.notifications
            .append(&employee.id, messages::PASSWORD_RESET_BY_EMAIL)
            .await;

        let mail = password_reset_mail(&employee, &temporary_password);
        match timeout(self.config.mail_timeout, self.mailer.send(&mail)).await {
            Ok(Ok(message_id)) => {
                info!(
                    employee_id = %employee.id,
                    message_id = %message_id,
                    "Password reset mail sent"
                );
                Ok(PasswordResetOutcome::Sent)
            }
            Ok(Err(e)) => {
                error!(employee_id = %employee.id, error = %e, "Password reset mail failed");
                Err(DomainError::MailDelivery { message: e })
            }
            Err(_) => {
                error!(employee_id = %employee.id, "Password reset mail timed out");
                Err(DomainError::MailDelivery {
                    message: format!(
                        "Mail dispatch exceeded {}s",
                        self.config.mail_timeout.as_secs()
                    ),
                })
            }
        }
    }

    /// Replace the password after verifying the current one
    pub async fn change_password(
        &self,
        employee_id: &str,
        old_password: Option<&str>,
        new_password: Option<&str>,
    ) -> DomainResult<()> {
        let old_password = require_present(old_password, "old_password")?;
        let new_password = require_present(new_password, "new_password")?;

        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee"))?;

        if !verify_password(old_password, &employee.password_hash).await? {
            info!(employee_id = %employee_id, "Password change rejected, old password mismatch");
            return Err(AuthError::IncorrectOldPassword.into());
        }

        self.store_password(employee_id, new_password).await?;
        self.notifications
            .append(employee_id, messages::PASSWORD_CHANGED)
            .await;

        info!(employee_id = %employee_id, "Password changed");
        Ok(())
    }

    /// Replace the password without checking the current one
    ///
    /// Authorizing this call is the caller's responsibility.
    pub async fn reset_password_internal(
        &self,
        employee_id: &str,
        new_password: Option<&str>,
    ) -> DomainResult<()> {
        let new_password = require_present(new_password, "new_password")?;

        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(DomainError::not_found("Employee"));
        }

        self.store_password(employee_id, new_password).await?;
        self.notifications
            .append(employee_id, messages::PASSWORD_RESET_INTERNAL)
            .await;

        info!(employee_id = %employee_id, "Password reset internally");
        Ok(())
    }

    async fn store_password(&self, employee_id: &str, password: &str) -> DomainResult<()> {
        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        if self.employees.update_password(employee_id, &password_hash).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("Employee"))
        }
    }
}
