//! Pre-authored phrasing pools. Placeholders are filled by `variants::fill`.
//!
//! Rules for authors: every entry is a single sentence, action entries carry
//! no placeholder, and nothing here may reference internal field names.

pub(crate) type Pool = [&'static str; 10];

pub(crate) const SCORE_ONLY_NO_BASELINE: Pool = [
    "You carded {score} ({to_par}), and that number becomes the marker for the rounds that follow.",
    "A {score} ({to_par}) is on the card, giving you a clear starting line for what comes next.",
    "This round finished at {score} ({to_par}), the first point on your scoring line.",
    "You posted {score} ({to_par}), which sets the bar your next rounds will be measured against.",
    "Your {score} ({to_par}) is logged and now anchors your scoring history.",
    "The card reads {score} ({to_par}), a solid reference point to build from.",
    "You signed for {score} ({to_par}), and that total now frames your next round.",
    "A finish of {score} ({to_par}) starts your scoring record on this card.",
    "You wrapped up at {score} ({to_par}), giving your next round something concrete to chase.",
    "Your round closed at {score} ({to_par}), the baseline every later card gets compared with.",
];

pub(crate) const SCORE_ONLY_BETTER: Pool = [
    "Your {score} came in {diff} strokes under your {avg} average.",
    "You beat your {avg} average by {diff} strokes with a {score}.",
    "A {score} puts you {diff} strokes better than your {avg} average.",
    "This {score} was {diff} strokes lower than your usual {avg}.",
    "You shaved {diff} strokes off your {avg} average with this {score}.",
    "Your {score} finished {diff} strokes ahead of your {avg} average.",
    "Scoring {score} beat your {avg} average by {diff} strokes.",
    "This round's {score} sits {diff} strokes below your {avg} average.",
    "You went {diff} strokes better than your {avg} average, signing for {score}.",
    "A {score} landed {diff} strokes under the {avg} you usually shoot.",
];

pub(crate) const SCORE_ONLY_MATCHED: Pool = [
    "Your {score} matched your {avg} average almost exactly.",
    "A {score} lined up right with your {avg} average.",
    "This {score} was a true reflection of your {avg} average.",
    "You shot {score}, right in line with your {avg} average.",
    "Your {score} landed on your {avg} average.",
    "Scoring {score} kept you level with your {avg} average.",
    "This round's {score} mirrored your {avg} average.",
    "You signed for {score}, essentially your {avg} average.",
    "A {score} sits right on top of your {avg} average.",
    "Your {score} tracked your {avg} average stroke for stroke.",
];

pub(crate) const SCORE_ONLY_WORSE: Pool = [
    "Your {score} finished {diff} strokes over your {avg} average.",
    "A {score} came in {diff} strokes above your {avg} average.",
    "This {score} was {diff} strokes higher than your usual {avg}.",
    "You shot {score}, {diff} strokes more than your {avg} average.",
    "Your {score} ran {diff} strokes past your {avg} average.",
    "Scoring {score} put you {diff} strokes behind your {avg} average.",
    "This round's {score} sits {diff} strokes above your {avg} average.",
    "You signed for {score}, {diff} strokes over the {avg} you usually shoot.",
    "A {score} drifted {diff} strokes above your {avg} average.",
    "Your {score} landed {diff} strokes on the wrong side of your {avg} average.",
];

pub(crate) const STANDOUT_LOST: Pool = [
    "{lead} lost {strokes} strokes against expectation.",
    "{lead} still gave back {strokes} strokes.",
    "{lead} finished {strokes} strokes down on the day.",
    "{lead} came up {strokes} strokes short of expectation.",
    "{lead} cost you {strokes} strokes overall.",
    "{lead} slipped {strokes} strokes below expectation.",
    "{lead} ended {strokes} strokes in the red.",
    "{lead} dropped {strokes} strokes compared with a typical round.",
    "{lead} leaked {strokes} strokes this time out.",
    "{lead} fell {strokes} strokes behind expectation.",
];

pub(crate) const STANDOUT: Pool = [
    "{area} defined this round, gaining {strokes} strokes on expectation.",
    "{area} carried the day, gaining {strokes} strokes.",
    "Your round was built on {area}, gaining {strokes} strokes against expectation.",
    "{area} was the standout, gaining {strokes} strokes.",
    "{area} did the heavy lifting, gaining {strokes} strokes on the field.",
    "The difference maker was {area}, gaining {strokes} strokes.",
    "{area} led the way, gaining {strokes} strokes compared with a typical round.",
    "Credit {area} for this one, gaining {strokes} strokes.",
    "{area} set the tone, gaining {strokes} strokes over expectation.",
    "{area} was the strength of the round, gaining {strokes} strokes.",
];

pub(crate) const NEAR_EVEN: Pool = [
    "No single area ran away with this round, and {area} led your stats at {value} strokes.",
    "This round was balanced, with {area} leading at {value} strokes.",
    "Nothing dominated the round, and {area} edged ahead at {value} strokes.",
    "Your measured areas stayed close together, with {area} on top at {value} strokes.",
    "It was an even round across the board, and {area} led at {value} strokes.",
    "No area separated itself, though {area} finished highest at {value} strokes.",
    "This one was steady rather than spectacular, with {area} leading at {value} strokes.",
    "Your game held level throughout, and {area} topped the list at {value} strokes.",
    "There was no runaway strength this time, with {area} best at {value} strokes.",
    "The round stayed close to expectation, and {area} led at {value} strokes.",
];

pub(crate) const SCORING_NO_BASELINE: Pool = [
    "With no scoring history yet, {score} is the number to beat next time.",
    "There is nothing to compare {score} against yet, so treat it as your target.",
    "Your {score} stands on its own for now and becomes the score to chase.",
    "Without earlier scores to lean on, {score} is your benchmark going forward.",
    "A {score} is your reference score until more rounds are logged.",
    "No comparison is available yet, so {score} sets the pace.",
    "For now {score} is the score every next round will try to beat.",
    "Until more rounds are on file, {score} is the line in the sand.",
    "Your {score} is the first mark on your scoring chart.",
    "With nothing earlier to compare, {score} becomes your scoring target.",
];

pub(crate) const SCORING_NEAR: Pool = [
    "At {score}, you finished close to your {avg} average.",
    "Your {score} was close to average, within {diff} strokes of your {avg}.",
    "Scoring {score} kept you close to your {avg} average.",
    "This {score} sits close to your {avg} average, a typical day on the card.",
    "You stayed close to average with {score} against your {avg}.",
    "A {score} is close to your {avg} average, right in your usual range.",
    "Your scoring held close to average at {score} versus {avg}.",
    "At {score} the card landed close to your {avg} average.",
    "This round's {score} was close to average for you, near your {avg}.",
    "You posted {score}, close to your {avg} average and well inside your normal range.",
];

pub(crate) const SCORING_HIGHER: Pool = [
    "Your {score} was {diff} strokes higher than your {avg} average.",
    "At {score}, scoring ran {diff} strokes higher than your {avg} average.",
    "This {score} came in higher than average, {diff} strokes above your {avg}.",
    "Scoring {score} was higher than your {avg} average by {diff} strokes.",
    "You finished {diff} strokes higher than your {avg} average at {score}.",
    "A {score} sits {diff} strokes higher than the {avg} you usually post.",
    "Your card read {score}, higher than your {avg} average by {diff} strokes.",
    "The {score} ran higher than average, {diff} strokes over your {avg}.",
    "This round finished {diff} strokes higher than your {avg} average.",
    "At {score} you were {diff} strokes higher than your {avg} average.",
];

pub(crate) const SCORING_STRONG: Pool = [
    "{score} is a strong score, {diff} strokes better than your {avg} average.",
    "A strong score of {score} beat your {avg} average by {diff} strokes.",
    "That {score} was a strong score, {diff} strokes under your {avg} average.",
    "Your {score} is a strong score for you, {diff} strokes clear of your {avg} average.",
    "Scoring {score} was a strong score, beating your {avg} average by {diff} strokes.",
    "This strong score of {score} came in {diff} strokes below your {avg} average.",
    "At {score} you posted a strong score, {diff} strokes better than your {avg}.",
    "A {score} is a strong score against your {avg} average, {diff} strokes better.",
    "Your strong score of {score} finished {diff} strokes ahead of your {avg} average.",
    "{score} marks a strong score, {diff} strokes under the {avg} you usually shoot.",
];

pub(crate) const SCORING_NEUTRAL: Pool = [
    "Your lowest area, {area}, sat close to even at {value} strokes, so nothing leaked badly.",
    "Even {area}, your lowest area, held near even at {value} strokes.",
    "{area} was your lowest area at {value} strokes, which is close to neutral.",
    "Nothing cost you much, with {area} lowest at {value} strokes.",
    "The weakest number belonged to {area} at {value} strokes, essentially even.",
    "{area} trailed the rest at {value} strokes, still close to expectation.",
    "Your floor was {area} at {value} strokes, so scoring held steady.",
    "{area} finished lowest at {value} strokes, a neutral result.",
    "No area dragged the score down, and {area} was lowest at {value} strokes.",
    "At {value} strokes, {area} was your lowest area and still close to even.",
];

pub(crate) const SCORING_LEAK: Pool = [
    "{area} cost the most, about {strokes} strokes against expectation.",
    "The biggest leak was {area}, which cost the most at {strokes} strokes.",
    "{area} cost the most on the card, roughly {strokes} strokes.",
    "Most of the damage came from {area}, which cost the most at {strokes} strokes.",
    "{area} cost the most this round, giving away {strokes} strokes.",
    "Scoring suffered most through {area}, which cost the most at {strokes} strokes.",
    "{area} cost the most, dropping {strokes} strokes compared with a typical round.",
    "The costliest area was {area}, which cost the most at {strokes} strokes.",
    "{area} cost the most strokes, {strokes} strokes in total.",
    "Where it slipped was {area}, which cost the most at {strokes} strokes.",
];

pub(crate) const SCORING_NET_POSITIVE: Pool = [
    "Even your lowest area, {area}, finished net positive at {value} strokes.",
    "Every measured area was net positive, with {area} lowest at {value} strokes.",
    "{area} was your lowest area and still net positive at {value} strokes.",
    "Nothing cost you strokes, as even {area} came in net positive at {value} strokes.",
    "Your measured areas all finished net positive, {area} included at {value} strokes.",
    "{area} trailed the rest but stayed net positive at {value} strokes.",
    "The floor of your round was {area}, net positive at {value} strokes.",
    "Across the board you were net positive, with {area} lowest at {value} strokes.",
    "{area} finished lowest yet net positive at {value} strokes.",
    "Even at its lowest, your game was net positive, with {area} at {value} strokes.",
];

pub(crate) const UNTRACKED_SWING: Pool = [
    "About {strokes} strokes were {direction} in parts of the game you did not track, like chipping and scrambling.",
    "Roughly {strokes} strokes were {direction} outside your measured stats, mostly around the greens.",
    "Another {strokes} strokes were {direction} in areas you did not log, such as short game and recovery shots.",
    "Around {strokes} strokes were {direction} away from your measured stats, likely chips and pitches.",
    "Close to {strokes} strokes were {direction} in untracked parts of the round.",
    "Your unlogged shots accounted for about {strokes} strokes {direction}.",
    "Some {strokes} strokes were {direction} in shots your stats do not cover, like bunker play and chips.",
    "About {strokes} strokes were {direction} in the short game and other shots you did not record.",
    "Roughly {strokes} strokes were {direction} beyond the stats you logged.",
    "Nearly {strokes} strokes were {direction} in places your stats cannot see, such as scrambling.",
];

pub(crate) const TRACKING_CLAUSE: Pool = [
    "Track {stats} so the picture gets sharper.",
    "Start tracking {stats} to sharpen the next read.",
    "Make sure to track {stats} next time.",
    "Track {stats} so every area can be measured.",
    "Log {stats} as you play so more of the round can be tracked.",
    "Keep track of {stats} to fill in the gaps.",
    "Try to track {stats} on the card.",
    "Track {stats} so the next round gets a fuller breakdown.",
    "Add {stats} to what you track each hole.",
    "Track {stats} to unlock a clearer breakdown.",
];

pub(crate) const GENERIC_ACTION: Pool = [
    "Commit to one clear target on every shot and hold your finish.",
    "Run the same pre-shot routine on every swing, putts included.",
    "Pick conservative targets on trouble holes and play to the fat side of greens.",
    "Spend ten minutes of your warm-up on the shots you hit most often.",
    "Play each hole with a plan from the tee back to the green.",
    "Stay patient after a bad hole and reset with a deep breath before the next tee shot.",
    "Focus on solid contact over distance and let the score follow.",
    "Take one extra club on approaches that carry over trouble.",
    "Keep a simple swing thought and trust it for the whole round.",
    "Aim for the middle of the green whenever the pin is tucked.",
];

pub(crate) const ACTION_OFF_TEE: Pool = [
    "Hit fairway finders off the tee and take a club that keeps the ball in play.",
    "Spend your range time on a go-to tee shot you can trust under pressure.",
    "Aim at the widest part of each fairway and commit to that line.",
    "Take less than driver on tight holes and play for position.",
    "Work on a consistent tee height and ball position for your driver.",
    "Pick an intermediate target a few feet ahead and start your tee ball over it.",
    "Hit ten drives at the range aiming at a narrow window before you play.",
    "Favor a reliable fade or draw off the tee and stick with that shape.",
    "Swing at about eighty percent on tee shots and focus on centered contact.",
    "Map out where trouble sits on each tee box and choose the safe side.",
];

pub(crate) const ACTION_APPROACH: Pool = [
    "Dial in your wedge distances at the range with a half and full swing.",
    "Aim approach shots at the center of the green instead of the flag.",
    "Check your carry yardage for each iron and club to that number.",
    "Practice approach shots from the distances you face most often.",
    "Take an extra club on approaches and make a smooth swing.",
    "Work on crisp ball-first contact with your mid irons.",
    "Play approaches to the safe side of the green when the pin is near trouble.",
    "Hit a ladder drill with your wedges to sharpen distance control.",
    "Pick a precise landing spot on every approach before you swing.",
    "Spend your warm-up hitting approach shots to different targets.",
];

pub(crate) const ACTION_PUTTING: Pool = [
    "Run a lag-putting drill from 30 to 40 feet before your round.",
    "Spend fifteen minutes on a lag-putting drill to cut down three-putts.",
    "Warm up with a lag-putting drill that finishes every ball inside three feet.",
    "Use a lag-putting drill to match your stroke length to distance.",
    "Start your practice with a lag-putting drill from the fringe to the far side of the green.",
    "Try a ladder-style lag-putting drill at 20, 30, and 40 feet.",
    "Finish your warm-up with a lag-putting drill to three different holes.",
    "Work through a lag-putting drill aiming to stop every putt just past the cup.",
    "Make a lag-putting drill the first thing you do on the practice green.",
    "Groove speed control with a lag-putting drill before you tee off.",
];

pub(crate) const ACTION_PENALTIES: Pool = [
    "Play away from hazards and accept a longer next shot when trouble is in range.",
    "Take your medicine after a wayward shot and punch back to the fairway.",
    "Choose a club off the tee that cannot reach the water or out of bounds.",
    "Aim away from the side of the hole where trouble waits.",
    "Lay up short of hazards instead of forcing a carry.",
    "Pick the safe line on every tee shot where a penalty is in play.",
    "Treat every hazard as a wall and give it a wide berth.",
    "Play for bogey on holes with trouble rather than chasing a hero shot.",
    "Keep the ball in play first and let scoring chances come to you.",
    "Before each shot, name the miss you cannot afford and aim away from it.",
];

pub(crate) const ONBOARDING_FIRST: Pool = [
    "Welcome to your first logged round, a {score} ({to_par}) over {holes} holes.",
    "Your first round is in at {score} ({to_par}) for {holes} holes.",
    "Round one is on the board with a {score} ({to_par}) across {holes} holes.",
    "You logged your first round, {score} ({to_par}) over {holes} holes.",
    "First round recorded, {score} ({to_par}) on {holes} holes.",
    "Your scoring story starts with a {score} ({to_par}) over {holes} holes.",
    "A {score} ({to_par}) across {holes} holes opens your round history.",
    "Your very first card reads {score} ({to_par}) for {holes} holes.",
    "Round one is logged, a {score} ({to_par}) through {holes} holes.",
    "You are off and running with a {score} ({to_par}) over {holes} holes.",
];

pub(crate) const ONBOARDING_BETTER: Pool = [
    "Round {round} came in at {score}, {gap} better than your last round.",
    "You improved to {score} in round {round}, {gap} better than last time.",
    "Round {round} beat your previous {previous} by {gap}, finishing at {score}.",
    "Nice progress, {score} in round {round} is {gap} better than your last card.",
    "You dropped {gap} from your previous round with a {score} in round {round}.",
    "Round {round} shows improvement, {score} against {previous} last time.",
    "Your {score} in round {round} was {gap} lower than your previous {previous}.",
    "Round {round} went better, {gap} under your last score of {previous}.",
    "You shot {score} in round {round}, an improvement of {gap} on last time.",
    "Round {round} finished at {score}, {gap} better than the {previous} before it.",
];

pub(crate) const ONBOARDING_SAME: Pool = [
    "Round {round} finished at {score}, matching your last round.",
    "You shot {score} again in round {round}, the same as last time.",
    "Round {round} landed at {score}, level with your previous {previous}.",
    "Consistency counts, {score} in round {round} matches your last card.",
    "Your {score} in round {round} repeated your previous score.",
    "Round {round} came in at {score}, right where your last round ended.",
    "You held steady at {score} in round {round}.",
    "Round {round} mirrored your last round with another {score}.",
    "Another {score} in round {round} shows a repeatable game.",
    "Round {round} matched your previous {previous} exactly.",
];

pub(crate) const ONBOARDING_WORSE: Pool = [
    "Round {round} came in at {score}, {gap} more than your last round.",
    "You shot {score} in round {round}, {gap} higher than last time.",
    "Round {round} finished {gap} above your previous {previous}, at {score}.",
    "Your {score} in round {round} was {gap} higher than your last card, which happens early on.",
    "Round {round} ran {gap} past your last score of {previous}.",
    "A {score} in round {round} is {gap} more than last time, and early rounds always swing.",
    "Round {round} landed at {score}, {gap} behind your previous {previous}.",
    "You finished round {round} at {score}, {gap} higher than the round before.",
    "Round {round} was a tougher day at {score}, {gap} more than last time.",
    "Your round {round} score of {score} was {gap} above your previous {previous}.",
];

pub(crate) const ONBOARDING_HABIT: Pool = [
    "Log fairways, greens, putts, and penalties each round to get the most out of your insights.",
    "Keep recording fairways, greens, putts, and penalties as you play.",
    "The more holes you log with fairways, greens, and putts, the sharper your feedback gets.",
    "Note fairways hit, greens hit, putts, and penalties on every hole.",
    "Make logging fairways, greens, putts, and penalties part of your routine.",
    "Recording putts and penalties alongside fairways and greens gives you a complete picture.",
    "Try to capture fairways, greens, putts, and penalties each time out.",
    "A complete card with fairways, greens, putts, and penalties unlocks deeper feedback.",
    "Keep a quick tally of fairways, greens, putts, and penalties while you play.",
    "Every stat you log now, from fairways to putts, pays off in later insights.",
];

pub(crate) const ONBOARDING_REMAINING: Pool = [
    "Log {rounds} to unlock full post-round insights.",
    "You are {rounds} away from full post-round insights.",
    "Just {rounds} until your full insights switch on.",
    "Play {rounds} and your full post-round insights unlock.",
    "Full insights unlock after {rounds}.",
    "Record {rounds} to see your complete breakdown.",
    "Only {rounds} left before full post-round insights.",
    "Keep going, {rounds} to go until full insights.",
    "After {rounds}, your full post-round insights begin.",
    "Your full insights arrive after {rounds}.",
];
