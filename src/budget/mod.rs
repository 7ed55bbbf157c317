//! Budget request intake.
//!
//! Requests are checked for the required fields and rendered into the notification text the
//! lab receives. Delivery is not wired up; the notification is written to the log.

use chrono::{DateTime, Local};

use crate::errors::AppError;
use crate::models::BudgetRequest;

/// Message returned to the visitor when a required field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Campos obrigatórios não preenchidos";
/// Message returned to the visitor once the request is accepted.
pub const RECEIVED_MESSAGE: &str = "Solicitação recebida com sucesso!";

const NOT_PROVIDED: &str = "Não informado";

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A budget request whose required fields are all present.
#[derive(Debug, Clone)]
pub struct ValidBudgetRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub project_type: &'a str,
    pub description: &'a str,
    request: &'a BudgetRequest,
}

impl<'a> ValidBudgetRequest<'a> {
    /// Check that `name`, `email`, `projectType` and `description` are present and non-empty.
    pub fn validate(request: &'a BudgetRequest) -> Result<Self, AppError> {
        match (
            present(&request.name),
            present(&request.email),
            present(&request.project_type),
            present(&request.description),
        ) {
            (Some(name), Some(email), Some(project_type), Some(description)) => Ok(Self {
                name,
                email,
                project_type,
                description,
                request,
            }),
            _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }

    fn optional(&self, value: &'a Option<String>) -> &'a str {
        present(value).unwrap_or(NOT_PROVIDED)
    }

    /// Render the plain-text notification for the lab.
    pub fn notification(&self, received_at: DateTime<Local>) -> String {
        format!(
            "Nova Solicitação de Orçamento - LAMFO\n\
             \n\
             DADOS DO CLIENTE:\n\
             Nome: {name}\n\
             Email: {email}\n\
             Empresa: {company}\n\
             Telefone: {phone}\n\
             \n\
             DETALHES DO PROJETO:\n\
             Tipo de Projeto: {project_type}\n\
             Descrição: {description}\n\
             Objetivos: {objectives}\n\
             Prazo Desejado: {timeline}\n\
             Orçamento Aproximado: {budget}\n\
             \n\
             Data da Solicitação: {date}\n",
            name = self.name,
            email = self.email,
            company = self.optional(&self.request.company),
            phone = self.optional(&self.request.phone),
            project_type = self.project_type,
            description = self.description,
            objectives = self.optional(&self.request.objectives),
            timeline = self.optional(&self.request.timeline),
            budget = self.optional(&self.request.budget),
            date = received_at.format("%d/%m/%Y %H:%M:%S"),
        )
    }
}
