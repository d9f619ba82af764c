use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumError {
    #[error("Error: El argumento {token} no tiene el formato esperado 'key=value'.")]
    MalformedToken { token: String },

    #[error("Error: El argumento {token} no tiene el formato esperado 'key=value'.")]
    InvalidNumber {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Error: No se recibieron los números adecuados.")]
    MissingOperands,

    #[error("Error al leer los números desde STDIN")]
    StdinRead(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SumError>;
