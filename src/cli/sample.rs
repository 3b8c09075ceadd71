//! Built-in sample transcript for trying the tool without input

pub const SAMPLE_TRANSCRIPT: &str = r#"A: Thanks for calling Northwind Internet, this is Priya. How can I help?
B: Hi Priya, my connection has been dropping every evening for about a week. It usually goes out around 7 and comes back after twenty minutes or so.
A: I'm sorry about that. Can I get the account holder's name?
B: Marcus Reed, at 41 Alder Street.
A: Thanks, Mr. Reed. I can see your modem reconnecting several times a night this week. Have you restarted it recently?
B: Twice. It helps for a day and then it starts again.
A: Understood. There's a firmware update pending on your modem, and there's also planned maintenance on the Alder Street node this Friday. I'll push the update now, and if the drops continue I'd like to send a technician.
B: That's fine. I work from home, so evenings aren't the problem, but I have client calls Thursday afternoon and I really can't lose the connection then.
A: Got it. I'll note that on the ticket. If a visit is needed, we have openings Wednesday between 8 and 12.
B: Wednesday morning works.
A: Great. I've booked the technician for Wednesday, 8 to 12, and you'll get a text an hour before they arrive. I'm also applying a credit for the days you were affected.
B: I appreciate that. Thanks, Priya.
A: You're welcome, Mr. Reed. Have a good evening."#;
