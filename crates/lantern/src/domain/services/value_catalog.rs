//! Core value catalog offered to the model as candidate labels

use serde::Serialize;

/// A candidate core value
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CoreValue {
    pub name: &'static str,
    pub description: &'static str,
}

pub const CORE_VALUES: &[CoreValue] = &[
    CoreValue { name: "達成", description: "目標達成、成功、結果を出すこと" },
    CoreValue { name: "誠実", description: "正直さ、約束を守ること、信頼" },
    CoreValue { name: "自由", description: "自己決定、束縛からの解放" },
    CoreValue { name: "成長", description: "学習、自己改善、スキル向上" },
    CoreValue { name: "貢献", description: "他者への奉仕、社会的意義" },
    CoreValue { name: "創造", description: "新しいものを生み出すこと" },
    CoreValue { name: "調和", description: "平和、バランス、争いの回避" },
    CoreValue { name: "安全", description: "リスク回避、安定、保護" },
    CoreValue { name: "愛情", description: "親密さ、愛、つながり" },
    CoreValue { name: "承認", description: "認められること、尊敬、評価" },
    CoreValue { name: "権力", description: "影響力、コントロール、地位" },
    CoreValue { name: "快楽", description: "楽しみ、喜び、満足" },
];

pub fn find_core_value(name: &str) -> Option<&'static CoreValue> {
    CORE_VALUES.iter().find(|v| v.name == name)
}
