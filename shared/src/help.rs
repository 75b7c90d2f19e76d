//! Help desk options and modal state

use crate::config::SupportConfig;

/// Glyph of a help option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpIcon {
    FileText,
    MessageCircle,
    Phone,
    Mail,
}

/// What choosing an option does before the modal closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpAction {
    /// Emit a diagnostic line only
    Log(&'static str),
    /// Open a link through the platform (`tel:`, `mailto:`)
    OpenLink(String),
}

/// A support contact option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOption {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: HelpIcon,
    pub action: HelpAction,
}

/// The four support options, in display order
pub fn help_options(support: &SupportConfig) -> Vec<HelpOption> {
    vec![
        HelpOption {
            id: "faq",
            title: "FAQ - Perguntas Frequentes",
            description: "Respostas para as dúvidas mais comuns sobre o sistema",
            icon: HelpIcon::FileText,
            action: HelpAction::Log("Abrindo FAQ"),
        },
        HelpOption {
            id: "chat",
            title: "Chat de Suporte",
            description: "Converse em tempo real com nossa equipe",
            icon: HelpIcon::MessageCircle,
            action: HelpAction::Log("Abrindo Chat"),
        },
        HelpOption {
            id: "phone",
            title: "Suporte por Telefone",
            description: "Ligue para (11) 3456-7890 - Seg à Sex, 8h às 18h",
            icon: HelpIcon::Phone,
            action: HelpAction::OpenLink(support.phone_link.clone()),
        },
        HelpOption {
            id: "email",
            title: "Suporte por Email",
            description: "Envie sua dúvida para suporte@monitoramento.com",
            icon: HelpIcon::Mail,
            action: HelpAction::OpenLink(support.email_link.clone()),
        },
    ]
}

/// Open/closed state of the help modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpDeskModel {
    open: bool,
}

impl HelpDeskModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Backdrop and close icon: no side effects
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Choose an option. Always closes; returns the link to open, if any.
    pub fn choose<'a>(&mut self, option: &'a HelpOption) -> Option<&'a str> {
        self.open = false;
        match &option.action {
            HelpAction::Log(_) => None,
            HelpAction::OpenLink(link) => Some(link.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<HelpOption> {
        help_options(&SupportConfig::default())
    }

    #[test]
    fn test_options_in_fixed_order() {
        let ids: Vec<_> = options().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["faq", "chat", "phone", "email"]);
    }

    #[test]
    fn test_phone_opens_tel_link_and_closes() {
        let options = options();
        let mut model = HelpDeskModel::new();
        model.open();
        assert!(model.is_open());

        let link = model.choose(&options[2]);
        assert_eq!(link, Some("tel:+551134567890"));
        assert!(!model.is_open());
    }

    #[test]
    fn test_email_opens_mailto_link() {
        let options = options();
        let mut model = HelpDeskModel::new();
        model.open();
        assert_eq!(model.choose(&options[3]), Some("mailto:suporte@monitoramento.com"));
        assert!(!model.is_open());
    }

    #[test]
    fn test_faq_and_chat_only_close() {
        let options = options();
        for option in &options[..2] {
            let mut model = HelpDeskModel::new();
            model.open();
            assert_eq!(model.choose(option), None);
            assert!(!model.is_open());
        }
    }

    #[test]
    fn test_backdrop_closes_without_link() {
        let mut model = HelpDeskModel::new();
        model.open();
        model.close();
        assert!(!model.is_open());
    }

    #[test]
    fn test_links_follow_config() {
        let support = SupportConfig {
            phone_link: "tel:+5511999999999".to_string(),
            email_link: "mailto:help@example.com".to_string(),
        };
        let options = help_options(&support);
        assert_eq!(options[2].action, HelpAction::OpenLink("tel:+5511999999999".to_string()));
        assert_eq!(options[3].action, HelpAction::OpenLink("mailto:help@example.com".to_string()));
    }
}
