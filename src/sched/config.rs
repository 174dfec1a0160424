//! Constantes de configuração do Scheduler

/// Quantum padrão (ticks por turno)
pub const DEFAULT_QUANTUM: u32 = 2;

/// Prioridade padrão (informativa; o dispatch não a consulta)
pub const PRIORITY_DEFAULT: u8 = 1;

/// Quantos semáforos nomeados existem no cenário padrão (S1..S3)
pub const DEFAULT_SEM_COUNT: usize = 3;

/// Valor inicial dos semáforos do cenário padrão
pub const DEFAULT_SEM_VALUE: i32 = 1;

/// Faixa do sorteio da política aleatória: inteiro uniforme em [0, 100)
pub const TRIGGER_DRAW_RANGE: u32 = 100;

/// Sorteios em [0, 10) disparam um wait em semáforo aleatório
pub const TRIGGER_WAIT_BELOW: u32 = 10;

/// Sorteios em [10, 20) disparam um signal em semáforo aleatório
pub const TRIGGER_SIGNAL_BELOW: u32 = 20;
