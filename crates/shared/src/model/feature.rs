/// Icons used on the landing page, drawn as inline 24x24 stroke svgs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    MessageSquare,
    Sparkles,
    Pen,
    Zap,
    ArrowUpRight,
    CheckCircle,
}

impl Icon {
    pub const fn name(&self) -> &'static str {
        use Icon::*;
        match self {
            MessageSquare => "message-square",
            Sparkles => "sparkles",
            Pen => "pen",
            Zap => "zap",
            ArrowUpRight => "arrow-up-right",
            CheckCircle => "check-circle",
        }
    }

    /// The `d` attribute of each path making up the icon
    pub const fn paths(&self) -> &'static [&'static str] {
        use Icon::*;
        match self {
            MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Sparkles => &[
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            Pen => &["M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"],
            Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            CheckCircle => &[
                "M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10z",
                "m9 12 2 2 4-4",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureDescriptor {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepDescriptor {
    pub ordinal: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureDescriptor; 4] = [
    FeatureDescriptor {
        icon: Icon::MessageSquare,
        title: "Interface Intuitiva",
        description: "Chat simples e direto para criar seus roteiros",
    },
    FeatureDescriptor {
        icon: Icon::Sparkles,
        title: "IA Especializada",
        description: "Tecnologia avançada focada em narrativas",
    },
    FeatureDescriptor {
        icon: Icon::Pen,
        title: "Roteiros Profissionais",
        description: "Resultados de qualidade para qualquer nível",
    },
    FeatureDescriptor {
        icon: Icon::Zap,
        title: "Resposta Rápida",
        description: "Obtenha seus roteiros em segundos",
    },
];

pub const STEPS: [StepDescriptor; 3] = [
    StepDescriptor {
        ordinal: 1,
        title: "Converse com a IA",
        description: "Descreva sua ideia de roteiro no chat intuitivo",
    },
    StepDescriptor {
        ordinal: 2,
        title: "Refine seu Roteiro",
        description: "Ajuste detalhes com comandos simples à IA",
    },
    StepDescriptor {
        ordinal: 3,
        title: "Exporte e Use",
        description: "Baixe seu roteiro finalizado em diversos formatos",
    },
];
