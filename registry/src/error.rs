use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("airline {0} is already a member")]
    AlreadyMember(String),

    #[error("airline {0} is not a member")]
    UnknownAirline(String),
}
