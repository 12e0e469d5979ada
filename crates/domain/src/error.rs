#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<UpdateError> for CreateError {
    fn from(value: UpdateError) -> Self {
        match value {
            UpdateError::Conflict => CreateError::Conflict,
            UpdateError::Storage(storage) => CreateError::Storage(storage),
            UpdateError::Other(other) => CreateError::Other(other),
        }
    }
}

impl From<ReadError> for CreateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound => CreateError::Other("referenced record not found".into()),
            ReadError::Storage(storage) => CreateError::Storage(storage),
            ReadError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for UpdateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound => UpdateError::Other("record not found".into()),
            ReadError::Storage(storage) => UpdateError::Storage(storage),
            ReadError::Other(other) => UpdateError::Other(other),
        }
    }
}

impl From<CreateError> for UpdateError {
    fn from(value: CreateError) -> Self {
        match value {
            CreateError::Conflict => UpdateError::Conflict,
            CreateError::Storage(storage) => UpdateError::Storage(storage),
            CreateError::Other(other) => UpdateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
