//! Estados de thread simulada

use std::fmt;

/// Estado de uma thread lógica
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadState {
    /// Pronta para executar
    Ready,
    /// Executando (no máximo uma por instante)
    Running,
    /// Bloqueada esperando uma primitiva
    Blocked,
    /// Consumiu todo o burst, nunca mais executa
    Terminated,
}

impl ThreadState {
    /// Verifica se pode ser escalonada
    pub const fn is_runnable(self) -> bool {
        matches!(self, Self::Ready | Self::Running)
    }
}

impl fmt::Display for ThreadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Blocked => "BLOCKED",
            Self::Terminated => "TERMINATED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apenas_ready_e_running_sao_escalonaveis() {
        assert!(ThreadState::Ready.is_runnable());
        assert!(ThreadState::Running.is_runnable());
        assert!(!ThreadState::Blocked.is_runnable());
        assert!(!ThreadState::Terminated.is_runnable());
    }
}
