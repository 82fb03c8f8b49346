use thiserror::Error;

/// Erros possíveis durante a limpeza de arquivos OFX
#[derive(Error, Debug)]
pub enum OfxCleanupError {
    /// O conteúdo não é UTF-8 válido nem Windows-1252 válido
    #[error("Content is neither valid UTF-8 nor Windows-1252")]
    UndecodableContent,

    /// Erro ao ler o conteúdo do arquivo do disco
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// Erro ao gravar o arquivo processado
    #[error("Failed to write output to {path}: {source}")]
    WriteOutputFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// O builder foi chamado sem fornecer conteúdo nem caminho de arquivo
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// Nenhuma ação (formatar ou corrigir FITID) foi escolhida
    #[error("An action is required")]
    MissingAction,

    /// A escolha informada não corresponde a nenhuma ação
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// Falha de leitura ou escrita no terminal interativo
    #[error("Terminal I/O failed: {0}")]
    TerminalIo(#[source] std::io::Error),

    /// Falha ao serializar o relatório de duplicados
    #[error("Failed to serialize report: {0}")]
    ReportSerialization(#[from] serde_json::Error),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type OfxCleanupResult<T> = Result<T, OfxCleanupError>;
