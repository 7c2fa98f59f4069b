#[cfg(test)]
mod tests {

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{bail, Result};

    use crate::mail_reader::credentials::{CredentialStore, Credentials};
    use crate::mail_reader::imap::{calculate_message_range, from_query, ImapConnector};
    use crate::mail_reader::message::RawMessage;
    use crate::mail_reader::{InboxConnector, Mailbox};
    use crate::settings::{parse_settings, Config, PlatformProfiles};
    use crate::verification::extractor::{
        ExtractedBooking, ExtractorRegistry, Field, FieldRule, RuleTableExtractor, Shape,
    };
    use crate::verification::locator::{locate, Located, NotFound};
    use crate::verification::unwrapper::{forwarded_text, repair_soft_breaks, unwrap, PRIMARY_MARKER};
    use crate::verification::verifier::verify;
    use crate::verification::{BookingVerifier, Outcome};

    const BOOKMYSHOW: &str = include_str!("resources/fixtures/bookmyshow.txt");
    const ZOMATO: &str = include_str!("resources/fixtures/zomato.txt");
    const PAYTMINSIDER: &str = include_str!("resources/fixtures/paytminsider.txt");

    const CONCERT_NIGHT_FORWARD: &str = "---------- Forwarded message ---------\n\
        From: BookMyShow <tickets@bookmyshow.email>\n\
        Subject: Booking confirmed for Concert Night\n\
        To: user@example.com\n\
        \n\
        BOOKING ID: ABC123\n\
        Venue Directions <a href=\"https://maps.example.com\">Map</a>\n Indoor Stadium\n\
        Date & Time\n Fri, 12 Jan | 7:00 PM <b>\n\
        Category Quantity Price\nGeneral\n2\n";

    fn registry() -> ExtractorRegistry {
        ExtractorRegistry::with_default_platforms().unwrap()
    }

    fn extract(text: &str, platform: &str) -> ExtractedBooking {
        registry().extract(&forwarded_text(text), platform).unwrap()
    }

    fn complete_booking() -> ExtractedBooking {
        ExtractedBooking {
            from_email: Some("tickets@bookmyshow.email".to_string()),
            to_email: Some("user@example.com".to_string()),
            booking_id: Some("ABC123".to_string()),
            venue: Some("Indoor Stadium".to_string()),
            date_time: Some("Fri, 12 Jan | 7:00 PM".to_string()),
            event_name: Some("Concert Night".to_string()),
            quantity: Some("2".to_string()),
        }
    }

    fn raw_mail(from: &str, subject: &str, body: &str) -> Vec<u8> {
        format!(
            "From: {}\r\nTo: bookings.verify@example.com\r\nSubject: {}\r\nContent-Type: text/plain; charset=utf-8\r\n\r\n{}",
            from, subject, body
        )
        .into_bytes()
    }

    #[derive(Clone, Default)]
    struct FakeMailbox {
        messages: Vec<(String, Vec<u8>)>,
        logouts: Arc<AtomicUsize>,
    }

    impl FakeMailbox {
        fn with(mut self, from: &str, raw: Vec<u8>) -> Self {
            self.messages.push((from.to_string(), raw));
            self
        }
    }

    impl Mailbox for FakeMailbox {
        async fn search_from(&mut self, sender: &str) -> Result<Vec<u32>> {
            Ok(self
                .messages
                .iter()
                .enumerate()
                .filter(|(_, (from, _))| from.to_lowercase().contains(&sender.to_lowercase()))
                .map(|(i, _)| i as u32 + 1)
                .collect())
        }

        async fn fetch(&mut self, seq: u32) -> Result<Option<Vec<u8>>> {
            Ok(self
                .messages
                .get(seq as usize - 1)
                .map(|(_, raw)| raw.clone()))
        }

        async fn logout(&mut self) -> Result<()> {
            self.logouts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FakeConnector {
        mailbox: Option<FakeMailbox>,
        connects: Arc<AtomicUsize>,
    }

    impl InboxConnector for FakeConnector {
        type Session = FakeMailbox;

        async fn connect(&self) -> Result<FakeMailbox> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            match &self.mailbox {
                Some(mailbox) => Ok(mailbox.clone()),
                None => bail!("socket error (getaddrinfo failed)"),
            }
        }
    }

    fn config() -> Config {
        parse_settings(include_str!("resources/settings.yaml")).unwrap()
    }

    fn verifier(mailbox: Option<FakeMailbox>) -> (BookingVerifier<FakeConnector>, Arc<AtomicUsize>) {
        let connects = Arc::new(AtomicUsize::new(0));
        let connector = FakeConnector {
            mailbox,
            connects: connects.clone(),
        };
        let verifier = BookingVerifier::new(connector, &config(), Arc::new(registry()))
            .with_propagation_delay(Duration::ZERO);
        (verifier, connects)
    }

    // Forward unwrapping

    #[test]
    fn test_unwrap_keeps_marker_and_drops_preamble() {
        let unwrapped = unwrap(BOOKMYSHOW);
        assert!(unwrapped.starts_with("---------- Forwarded message ---------"));
        assert!(!unwrapped.contains("Please find my booking below."));
    }

    #[test]
    fn test_unwrap_without_marker_returns_body() {
        let body = "Hi,\nFrom: someone@example.com\nnothing forwarded here\n";
        assert_eq!(unwrap(body), body);
    }

    #[test]
    fn test_unwrap_is_idempotent() {
        let once = unwrap(PAYTMINSIDER);
        assert!(once.starts_with("Begin forwarded message:"));
        assert_eq!(unwrap(once), once);
    }

    #[test]
    fn test_unwrap_prefers_marker_list_order_over_position() {
        let body = "Begin forwarded message:\nold part\n---------- Forwarded message ----------\nnew part\n";
        assert_eq!(unwrap(body), "---------- Forwarded message ----------\nnew part\n");
    }

    #[test]
    fn test_soft_line_breaks_are_repaired() {
        assert_eq!(repair_soft_breaks("Con=\ncert Ni=\r\nght"), "Concert Night");
        assert_eq!(repair_soft_breaks("Indoor Sta\\\ndium"), "Indoor Stadium");
    }

    // Platform extraction

    #[test]
    fn test_bookmyshow_golden() {
        let booking = extract(BOOKMYSHOW, "bookmyshow");
        assert_eq!(
            booking,
            ExtractedBooking {
                from_email: Some("tickets@bookmyshow.email".to_string()),
                to_email: Some("asha.rao@example.com".to_string()),
                booking_id: Some("ABC123".to_string()),
                venue: Some("Indoor Stadium, Chennai".to_string()),
                date_time: Some("Fri, 12 Jan | 7:00 PM".to_string()),
                event_name: Some("Concert Night".to_string()),
                quantity: Some("2".to_string()),
            }
        );
    }

    #[test]
    fn test_zomato_golden() {
        let booking = extract(ZOMATO, "zomato");
        assert_eq!(
            booking,
            ExtractedBooking {
                from_email: Some("eventsupport@zomato.com".to_string()),
                to_email: Some("ravi.kumar@example.com".to_string()),
                booking_id: Some("ZE8841207".to_string()),
                venue: Some("not available".to_string()),
                date_time: Some("Saturday, March 23, 2024".to_string()),
                event_name: Some("Sunburn Arena ft. Alan Walker".to_string()),
                quantity: Some("3".to_string()),
            }
        );
    }

    #[test]
    fn test_paytminsider_golden() {
        let booking = extract(PAYTMINSIDER, "paytminsider");
        assert_eq!(
            booking,
            ExtractedBooking {
                from_email: Some("purchases@insider.in".to_string()),
                to_email: Some("meera@example.com".to_string()),
                booking_id: Some("INS240410XYZ".to_string()),
                venue: Some("Mahalaxmi Race Course, Keshavrao Khadye Marg, Mumbai".to_string()),
                date_time: Some("Sat, 27 Jan 2024 12:00 PM".to_string()),
                event_name: Some("Lollapalooza India 2024".to_string()),
                quantity: Some("2".to_string()),
            }
        );
    }

    #[test]
    fn test_paytminsider_quantity_defaults_to_one() {
        let text = PAYTMINSIDER.replace("2 Tickets\n", "");
        assert_eq!(extract(&text, "paytminsider").quantity.as_deref(), Some("1"));
    }

    #[test]
    fn test_paytminsider_date_time_needs_both_lines() {
        let text = PAYTMINSIDER.replace("Time\n12:00 PM\n", "");
        assert_eq!(extract(&text, "paytminsider").date_time, None);
    }

    #[test]
    fn test_missing_fields_are_absent_not_errors() {
        let booking = extract("Fwd: hello\nnothing useful in here\n", "bookmyshow");
        assert_eq!(booking, ExtractedBooking::default());
    }

    #[test]
    fn test_addresses_found_across_line_breaks() {
        let booking = extract("From:\n  BookMyShow\n  <TICKETS@bookmyshow.email>\nTo:\n\nuser@example.com", "bookmyshow");
        assert_eq!(booking.from_email.as_deref(), Some("tickets@bookmyshow.email"));
        assert_eq!(booking.to_email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_unknown_platform_is_unsupported() {
        assert!(registry().extract(BOOKMYSHOW, "eventbrite").is_none());
        assert!(registry().get(" BookMyShow ").is_some());
    }

    #[test]
    fn test_registry_accepts_new_platforms() {
        const RULES: &[FieldRule] = &[FieldRule {
            field: Field::BookingId,
            patterns: &[r"(?i)Order\s+#(\d+)"],
            shape: Shape::Trimmed,
            default: None,
        }];
        let mut registry = registry();
        registry.register(Box::new(RuleTableExtractor::new("district", RULES).unwrap()));

        let booking = registry.extract("Order #4471", "district").unwrap();
        assert_eq!(booking.booking_id.as_deref(), Some("4471"));
        assert_eq!(registry.platforms(), vec!["bookmyshow", "district", "paytminsider", "zomato"]);
        assert_eq!(registry.get("district").map(|e| e.platform()), Some("district"));
    }

    #[test]
    fn test_field_labels_are_title_cased() {
        let labels: Vec<String> = Field::REQUIRED.iter().map(Field::label).collect();
        assert_eq!(labels, vec!["Booking Id", "Venue", "Date Time", "Event Name", "Quantity"]);
    }

    // Verification

    #[test]
    fn test_forwarded_bookmyshow_scenario_passes() {
        let booking = extract(CONCERT_NIGHT_FORWARD, "bookmyshow");
        assert_eq!(booking.booking_id.as_deref(), Some("ABC123"));
        assert_eq!(booking.venue.as_deref(), Some("Indoor Stadium"));
        assert_eq!(booking.date_time.as_deref(), Some("Fri, 12 Jan | 7:00 PM"));
        assert_eq!(booking.quantity.as_deref(), Some("2"));
        assert_eq!(booking.event_name.as_deref(), Some("Concert Night"));

        let report = verify(&booking, "tickets@bookmyshow.email", "user@example.com");
        assert!(report.passed());
        assert!(report.discrepancies.is_empty());
    }

    #[test]
    fn test_any_single_missing_field_fails_with_one_discrepancy() {
        for field in Field::REQUIRED {
            let mut booking = complete_booking();
            match field {
                Field::BookingId => booking.booking_id = None,
                Field::Venue => booking.venue = None,
                Field::DateTime => booking.date_time = None,
                Field::EventName => booking.event_name = None,
                Field::Quantity => booking.quantity = None,
            }

            let report = verify(&booking, "tickets@bookmyshow.email", "user@example.com");
            assert!(!report.passed());
            assert_eq!(
                report.discrepancies,
                vec![format!("{} not found in the email.", field.label())]
            );
        }
    }

    #[test]
    fn test_addresses_compare_ignoring_case() {
        let mut booking = complete_booking();
        booking.to_email = Some("User@Example.com".to_string());
        let report = verify(&booking, "Tickets@BookMyShow.email", "user@example.com");
        assert!(report.passed());
    }

    #[test]
    fn test_sender_mismatch_names_both_values() {
        let mut booking = complete_booking();
        booking.from_email = None;
        booking.to_email = Some("someone.else@example.com".to_string());

        let report = verify(&booking, "tickets@bookmyshow.email", "user@example.com");
        assert_eq!(
            report.discrepancies,
            vec![
                "From email does not match. Expected: tickets@bookmyshow.email, Found: None".to_string(),
                "To email does not match. Expected: user@example.com, Found: someone.else@example.com"
                    .to_string(),
            ]
        );
    }

    // Message locating

    #[tokio::test]
    async fn test_locate_only_considers_the_newest_message() {
        let mut mailbox = FakeMailbox::default()
            .with("user@example.com", raw_mail("user@example.com", "Fwd: Booking", BOOKMYSHOW))
            .with("user@example.com", raw_mail("user@example.com", "Re: lunch?", "see you"));

        let located = locate(&mut mailbox, "user@example.com").await.unwrap();
        assert!(matches!(located, Located::NotFound(NotFound::NotAForward)));
    }

    #[tokio::test]
    async fn test_locate_without_matches() {
        let mut mailbox = FakeMailbox::default()
            .with("other@example.com", raw_mail("other@example.com", "Fwd: Booking", BOOKMYSHOW));

        let located = locate(&mut mailbox, "user@example.com").await.unwrap();
        assert!(matches!(located, Located::NotFound(NotFound::NoEmails)));
    }

    #[tokio::test]
    async fn test_locate_ignores_newer_mail_from_other_senders() {
        let mut mailbox = FakeMailbox::default()
            .with("user@example.com", raw_mail("user@example.com", "Fwd: Booking", BOOKMYSHOW))
            .with("other@example.com", raw_mail("other@example.com", "Hello", "hi"));

        match locate(&mut mailbox, "user@example.com").await.unwrap() {
            Located::Found(message) => {
                assert_eq!(message.subject.as_deref(), Some("Fwd: Booking"));
                assert!(message.forwarded_body().unwrap().contains("BOOKING ID: ABC123"));
            }
            other => panic!("expected a forward, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_locate_decodes_encoded_subject() {
        let subject = "=?UTF-8?B?RndkOiBCb29raW5nIGNvbmZpcm1lZCBmb3IgQ29uY2VydCBOaWdodA==?=";
        let mut mailbox = FakeMailbox::default()
            .with("user@example.com", raw_mail("user@example.com", subject, BOOKMYSHOW));

        match locate(&mut mailbox, "user@example.com").await.unwrap() {
            Located::Found(message) => assert_eq!(
                message.subject.as_deref(),
                Some("Fwd: Booking confirmed for Concert Night")
            ),
            other => panic!("expected a forward, got {:?}", other),
        }
    }

    #[test]
    fn test_attached_forward_is_inlined() {
        let raw = "From: user@example.com\r\n\
            Subject: Fwd: tickets\r\n\
            MIME-Version: 1.0\r\n\
            Content-Type: multipart/mixed; boundary=\"XYZ\"\r\n\
            \r\n\
            --XYZ\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            See attached.\r\n\
            --XYZ\r\n\
            Content-Type: message/rfc822\r\n\
            \r\n\
            From: Zomato Events <eventsupport@zomato.com>\r\n\
            To: ravi.kumar@example.com\r\n\
            Subject: Your tickets\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            You just scored tickets to Sunburn Arena\r\n\
            Ticket ID: ZE1\r\n\
            --XYZ--\r\n";

        let message = RawMessage::parse(raw.as_bytes()).unwrap();
        assert!(message.is_forward());
        assert_eq!(message.plain_text_body().map(str::trim), Some("See attached."));

        let body = message.forwarded_body().unwrap();
        assert!(body.starts_with(PRIMARY_MARKER));

        let booking = extract(body, "zomato");
        assert_eq!(booking.from_email.as_deref(), Some("eventsupport@zomato.com"));
        assert_eq!(booking.to_email.as_deref(), Some("ravi.kumar@example.com"));
        assert_eq!(booking.booking_id.as_deref(), Some("ZE1"));
        assert_eq!(booking.event_name.as_deref(), Some("Sunburn Arena"));
    }

    // Whole pipeline

    #[tokio::test]
    async fn test_pipeline_passes_and_logs_out() {
        let mailbox = FakeMailbox::default()
            .with("asha.rao@example.com", raw_mail("asha.rao@example.com", "Fwd: Your Booking", BOOKMYSHOW));
        let logouts = mailbox.logouts.clone();
        let (verifier, _) = verifier(Some(mailbox));

        let outcome = verifier.verify("Asha.Rao@example.com", "bookmyshow").await;
        assert!(outcome.passed(), "{:?}", outcome);
        match outcome {
            Outcome::Verified { booking: Some(booking), .. } => {
                assert_eq!(booking.booking_id.as_deref(), Some("ABC123"))
            }
            other => panic!("expected extracted fields, got {:?}", other),
        }
        assert_eq!(logouts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_pipeline_reports_someone_elses_booking() {
        let mailbox = FakeMailbox::default()
            .with("meera@example.com", raw_mail("meera@example.com", "Fwd: tickets", ZOMATO));
        let (verifier, _) = verifier(Some(mailbox));

        let outcome = verifier.verify("meera@example.com", "zomato").await;
        assert_eq!(
            outcome,
            Outcome::Verified {
                passed: false,
                discrepancies: vec![
                    "To email does not match. Expected: meera@example.com, Found: ravi.kumar@example.com"
                        .to_string()
                ],
                booking: None,
            }
        );
        assert_eq!(outcome.message(), "Verification failed:");
    }

    #[tokio::test]
    async fn test_pipeline_logs_out_when_no_forward_found() {
        let mailbox = FakeMailbox::default()
            .with("user@example.com", raw_mail("user@example.com", "Hello", "not a forward"));
        let logouts = mailbox.logouts.clone();
        let (verifier, _) = verifier(Some(mailbox));

        let outcome = verifier.verify("user@example.com", "bookmyshow").await;
        assert_eq!(
            outcome,
            Outcome::NoForwardFound {
                reason: NotFound::NotAForward
            }
        );
        assert_eq!(logouts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_pipeline_without_plain_text_fails_to_parse() {
        let raw = "From: user@example.com\r\nSubject: Fwd: Booking\r\nContent-Type: text/html\r\n\r\n<p>BOOKING ID: ABC123</p>"
            .as_bytes()
            .to_vec();
        let mailbox = FakeMailbox::default().with("user@example.com", raw);
        let logouts = mailbox.logouts.clone();
        let (verifier, _) = verifier(Some(mailbox));

        let outcome = verifier.verify("user@example.com", "bookmyshow").await;
        assert_eq!(outcome, Outcome::ParseFailed);
        assert_eq!(outcome.message(), "Failed to parse the forwarded email.");
        assert_eq!(logouts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_pipeline_undecodable_body_fails_to_parse() {
        let raw = "From: user@example.com\r\n\
            Subject: Fwd: Booking\r\n\
            Content-Type: text/plain; charset=utf-8\r\n\
            Content-Transfer-Encoding: base64\r\n\
            \r\n\
            !!!!not*base64@@@\r\n";
        let mailbox = FakeMailbox::default().with("user@example.com", raw.as_bytes().to_vec());
        let logouts = mailbox.logouts.clone();
        let (verifier, _) = verifier(Some(mailbox));

        let outcome = verifier.verify("user@example.com", "bookmyshow").await;
        assert_eq!(outcome, Outcome::ParseFailed);
        assert_eq!(logouts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_undecodable_part_is_skipped() {
        let raw = "From: user@example.com\r\n\
            Subject: Fwd: Booking\r\n\
            Content-Type: multipart/mixed; boundary=\"XYZ\"\r\n\
            \r\n\
            --XYZ\r\n\
            Content-Type: text/plain\r\n\
            Content-Transfer-Encoding: base64\r\n\
            \r\n\
            !!!!not*base64@@@\r\n\
            --XYZ\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            BOOKING ID: ABC123\r\n\
            --XYZ--\r\n";
        let message = RawMessage::parse(raw.as_bytes()).unwrap();
        assert_eq!(message.parts.len(), 1);
        assert!(message.plain_text_body().unwrap().contains("ABC123"));
    }

    fn unreachable_connector(connect_attempts: u32) -> ImapConnector {
        let mut config = config();
        config.imap.server = "127.0.0.1".to_string();
        config.imap.port = 1;
        config.verification.connect_attempts = connect_attempts;
        config.verification.retry_delay_seconds = 0;
        let credentials = Credentials {
            username: "inbox@example.com".to_string(),
            password: "secret".to_string(),
        };
        ImapConnector::new(&config, credentials)
    }

    #[tokio::test]
    async fn test_imap_connect_gives_up_after_configured_attempts() {
        let err = match unreachable_connector(2).connect().await {
            Ok(_) => panic!("connected to a closed port"),
            Err(e) => e,
        };
        assert!(format!("{:#}", err).contains("after 2 attempts"), "{:#}", err);
    }

    #[tokio::test]
    async fn test_imap_connect_makes_at_least_one_attempt() {
        let err = match unreachable_connector(0).connect().await {
            Ok(_) => panic!("connected to a closed port"),
            Err(e) => e,
        };
        assert!(format!("{:#}", err).contains("after 1 attempts"), "{:#}", err);
    }

    #[tokio::test]
    async fn test_pipeline_connection_failure() {
        let (verifier, connects) = verifier(None);

        match verifier.verify("user@example.com", "zomato").await {
            Outcome::ConnectionFailed { reason } => assert!(reason.contains("getaddrinfo")),
            other => panic!("expected a connection failure, got {:?}", other),
        }
        assert_eq!(connects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_pipeline_unsupported_platform_never_connects() {
        let (verifier, connects) = verifier(Some(FakeMailbox::default()));

        let outcome = verifier.verify("user@example.com", "eventbrite").await;
        assert_eq!(
            outcome,
            Outcome::Unsupported {
                platform: "eventbrite".to_string()
            }
        );
        assert_eq!(connects.load(Ordering::SeqCst), 0);
        assert_eq!(verifier.supported_platforms(), vec!["bookmyshow", "paytminsider", "zomato"]);
    }

    // Settings, credentials and IMAP helpers

    #[test]
    fn test_settings_platform_lookup() {
        let config = config();
        assert_eq!(config.platforms.platform_email("Zomato"), Some("eventsupport@zomato.com"));
        assert_eq!(config.platforms.platform_email("eventbrite"), None);
        assert_eq!(config.verification.connect_attempts, 3);
    }

    #[test]
    fn test_settings_defaults_and_overrides() {
        let yaml = "imap:\n  server: imap.example.com\n  username: inbox@example.com\nserver:\n  host: 127.0.0.1\n  port: 8080\n";
        let mut config = parse_settings(yaml).unwrap();
        assert_eq!(config.imap.port, 993);
        assert_eq!(config.platforms, PlatformProfiles::default());
        assert_eq!(config.verification.propagation_delay_seconds, 5);

        config.apply_overrides(|key| match key {
            "IMAP_SERVER" => Some("imap.override.test".to_string()),
            _ => None,
        });
        assert_eq!(config.imap.server, "imap.override.test");
        assert_eq!(config.imap.username, "inbox@example.com");
    }

    #[test]
    fn test_sealed_password_round_trip() {
        let dir = std::env::temp_dir().join(format!("ticketproof-credentials-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let store = CredentialStore::in_dir(&dir);

        let sealed = store.seal("app-password").unwrap();
        assert_ne!(sealed, "app-password");
        assert_eq!(store.unseal(&sealed).unwrap(), "app-password");
        assert!(store.unseal("c2hvcnQ=").is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_message_range_and_search_query() {
        assert_eq!(calculate_message_range(42, 5).as_deref(), Some("38:42"));
        assert_eq!(calculate_message_range(3, 5).as_deref(), Some("1:3"));
        assert_eq!(calculate_message_range(0, 5), None);
        assert_eq!(from_query("user@example.com"), "FROM \"user@example.com\"");
        assert_eq!(from_query("a\"b\\c@example.com"), "FROM \"abc@example.com\"");
    }
}
